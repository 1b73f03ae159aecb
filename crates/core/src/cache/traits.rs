use async_trait::async_trait;

use super::Result;

/// Key-value cache used as a read-through layer by the services.
///
/// Values are opaque bytes; expiry is a backend concern.
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Stores a value under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Gets the value stored under `key`, if any.
    async fn recover(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Deletes the value stored under `key`.
    async fn invalidate(&self, key: &str) -> Result<()>;

    /// Deletes every value whose key starts with `{prefix}:`.
    async fn invalidate_prefix(&self, prefix: &str) -> Result<()>;
}
