//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the collaborators of the services as trait
//! objects and supports different backend combinations via feature flags.

use std::sync::Arc;

use gobarber_core::cache::CacheProvider;
use gobarber_core::providers::{HashProvider, StorageProvider};
use gobarber_core::storage::{AppointmentRepository, UserRepository};

use crate::config::Config;
use crate::providers::{Argon2HashProvider, DiskStorageProvider};

/// Shared application state.
///
/// This is cloned for each request handler. Services are built per request
/// from these collaborators.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub cache: Arc<dyn CacheProvider>,
    pub hash_provider: Arc<dyn HashProvider>,
    pub storage: Arc<dyn StorageProvider>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given collaborators and configuration.
    fn build(
        users: Arc<dyn UserRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        cache: Arc<dyn CacheProvider>,
        config: &Config,
    ) -> Self {
        Self {
            users,
            appointments,
            cache,
            hash_provider: Arc::new(Argon2HashProvider::new()),
            storage: Arc::new(DiskStorageProvider::new(
                config.tmp_folder.clone(),
                config.uploads_folder.clone(),
            )),
            config: Arc::new(config.clone()),
        }
    }

    /// Replaces the hash provider.
    #[cfg(test)]
    pub fn with_hash_provider(mut self, hash_provider: Arc<dyn HashProvider>) -> Self {
        self.hash_provider = hash_provider;
        self
    }
}

/// Creates the upload folders before the server accepts requests.
pub async fn prepare_upload_folders(config: &Config) -> Result<(), anyhow::Error> {
    DiskStorageProvider::new(config.tmp_folder.clone(), config.uploads_folder.clone())
        .ensure_folders()
        .await?;
    Ok(())
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache =
                Arc::new(MemoryCache::new(config.cache_max_entries).with_ttl(config.cache_ttl()));

            Ok(Self::build(
                sqlite_repo.clone(),
                sqlite_repo,
                memory_cache,
                config,
            ))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache =
                Arc::new(RedisCache::new(&config.redis_url).await?.with_ttl(config.cache_ttl()));

            Ok(Self::build(
                sqlite_repo.clone(),
                sqlite_repo,
                redis_cache,
                config,
            ))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache =
                Arc::new(MemoryCache::new(config.cache_max_entries).with_ttl(config.cache_ttl()));

            Ok(Self::build(
                inmemory_repo.clone(),
                inmemory_repo,
                memory_cache,
                config,
            ))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache =
                Arc::new(RedisCache::new(&config.redis_url).await?.with_ttl(config.cache_ttl()));

            Ok(Self::build(
                inmemory_repo.clone(),
                inmemory_repo,
                redis_cache,
                config,
            ))
        }
    }
}
