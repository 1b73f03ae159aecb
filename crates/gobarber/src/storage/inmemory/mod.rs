//! In-memory storage backend.
//!
//! Stores all data in HashMaps wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted; useful for development and tests.

mod repository;

pub use repository::InMemoryRepository;
