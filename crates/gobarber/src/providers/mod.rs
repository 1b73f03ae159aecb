//! Concrete hash and storage providers used by the server.

mod argon2_hash;
mod disk_storage;

pub use argon2_hash::Argon2HashProvider;
pub use disk_storage::DiskStorageProvider;
