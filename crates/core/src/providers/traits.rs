use async_trait::async_trait;

use super::Result;

/// One-way password hashing.
#[async_trait]
pub trait HashProvider: Send + Sync {
    /// Hashes a plain-text password.
    async fn generate_hash(&self, payload: &str) -> Result<String>;

    /// Returns true if `payload` hashes to `hashed`.
    async fn compare_hash(&self, payload: &str, hashed: &str) -> Result<bool>;
}

/// Persistent storage for uploaded files.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Moves an uploaded file into permanent storage and returns the name it
    /// is stored under.
    async fn save_file(&self, file: &str) -> Result<String>;

    /// Deletes a stored file. Deleting a missing file is not an error.
    async fn delete_file(&self, file: &str) -> Result<()>;
}
