//! Redis cache implementation.
//!
//! Keys under a tracked prefix (the text before the first `:`) are also
//! added to a Redis Set named after that prefix, so prefix invalidation
//! needs neither `KEYS` nor `SCAN`. Only `providers-list` is tracked by
//! default; other keys rely on their TTL alone and are never added to a
//! set. Tracking sets share the entry TTL.
//!
//! # Non-Atomicity
//!
//! `save` and `invalidate_prefix` issue several commands. A crash between
//! them leaves at worst a stale member in a tracking set, which a later
//! `DEL` on the missing key ignores.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use gobarber_core::cache::{CacheProvider, Result, PROVIDERS_LIST_PREFIX};

use super::error::map_redis_error;

/// Returns the prefix a key is tracked under, if it has one.
fn key_prefix(key: &str) -> Option<&str> {
    key.split_once(':').map(|(prefix, _)| prefix)
}

/// Returns the name of the Set tracking every key under `prefix`.
fn tracking_key(prefix: &str) -> String {
    format!("cache-tracking:{prefix}")
}

/// Redis cache backend using connection manager for pooling.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
    ttl: Option<Duration>,
    tracked_prefixes: Vec<String>,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self {
            conn,
            ttl: None,
            tracked_prefixes: vec![PROVIDERS_LIST_PREFIX.to_string()],
        })
    }

    /// Expires every saved entry after `ttl` (rounded up to one second).
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Makes keys under `prefix` invalidatable with `invalidate_prefix`.
    #[cfg(test)]
    pub fn track_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tracked_prefixes.push(prefix.into());
        self
    }

    fn tracked_prefix<'a>(&self, key: &'a str) -> Option<&'a str> {
        key_prefix(key).filter(|prefix| self.is_tracked(prefix))
    }

    fn is_tracked(&self, prefix: &str) -> bool {
        self.tracked_prefixes.iter().any(|tracked| tracked == prefix)
    }

    fn ttl_seconds(&self) -> Option<u64> {
        self.ttl.map(|duration| duration.as_secs().max(1))
    }
}

#[async_trait]
impl CacheProvider for RedisCache {
    async fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();

        match self.ttl_seconds() {
            Some(seconds) => {
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        if let Some(prefix) = self.tracked_prefix(key) {
            let tracking = tracking_key(prefix);
            conn.sadd::<_, _, ()>(&tracking, key)
                .await
                .map_err(map_redis_error)?;

            if let Some(seconds) = self.ttl_seconds() {
                conn.expire::<_, ()>(&tracking, seconds as i64)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        Ok(())
    }

    async fn recover(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn invalidate(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();

        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;

        if let Some(prefix) = self.tracked_prefix(key) {
            conn.srem::<_, _, ()>(tracking_key(prefix), key)
                .await
                .map_err(map_redis_error)?;
        }

        Ok(())
    }

    async fn invalidate_prefix(&self, prefix: &str) -> Result<()> {
        if !self.is_tracked(prefix) {
            tracing::warn!(prefix, "Ignoring invalidation of untracked cache prefix");
            return Ok(());
        }

        let mut conn = self.conn.clone();
        let tracking = tracking_key(prefix);

        let tracked_keys: Vec<String> = conn.smembers(&tracking).await.map_err(map_redis_error)?;

        if !tracked_keys.is_empty() {
            conn.del::<_, ()>(&tracked_keys)
                .await
                .map_err(map_redis_error)?;
        }

        conn.del::<_, ()>(&tracking)
            .await
            .map_err(map_redis_error)?;

        tracing::debug!(prefix, count = tracked_keys.len(), "Invalidated cache prefix");

        Ok(())
    }
}
