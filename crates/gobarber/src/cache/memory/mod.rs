//! In-memory cache backend implementation.
//!
//! Thread-safe LRU cache with TTL for single-instance deployments.

mod cache;

pub use cache::MemoryCache;
