use std::sync::Arc;

use uuid::Uuid;

use crate::cache::{deserialize_users, providers_list_key, serialize_users, CacheProvider};
use crate::error::ServiceResult;
use crate::storage::UserRepository;
use crate::users::User;

/// Lists every bookable user except the one asking, read through the cache.
pub struct ListProvidersService {
    users: Arc<dyn UserRepository>,
    cache: Arc<dyn CacheProvider>,
}

impl ListProvidersService {
    pub fn new(users: Arc<dyn UserRepository>, cache: Arc<dyn CacheProvider>) -> Self {
        Self { users, cache }
    }

    /// Cached users carry no password hash.
    pub async fn execute(&self, user_id: Uuid) -> ServiceResult<Vec<User>> {
        let cache_key = providers_list_key(user_id);

        match self.cache.recover(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_users(&bytes) {
                Ok(providers) => {
                    tracing::trace!(key = %cache_key, "Cache hit");
                    return Ok(providers);
                }
                Err(err) => {
                    tracing::warn!(key = %cache_key, error = %err, "Discarding unreadable cache entry");
                }
            },
            Ok(None) => tracing::trace!(key = %cache_key, "Cache miss"),
            Err(err) => tracing::warn!(key = %cache_key, error = %err, "Cache read failed"),
        }

        let providers = self.users.find_all_providers(Some(user_id)).await?;

        match serialize_users(&providers) {
            Ok(bytes) => {
                if let Err(err) = self.cache.save(&cache_key, &bytes).await {
                    tracing::warn!(key = %cache_key, error = %err, "Cache write failed");
                }
            }
            Err(err) => {
                tracing::warn!(key = %cache_key, error = %err, "Failed to serialize providers");
            }
        }

        Ok(providers)
    }
}
