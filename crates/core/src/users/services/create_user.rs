use std::sync::Arc;

use crate::cache::{CacheProvider, PROVIDERS_LIST_PREFIX};
use crate::error::{AppError, ServiceResult};
use crate::providers::HashProvider;
use crate::storage::{CreateUserData, UserRepository};
use crate::users::{CreateUserRequest, User};

/// Registers a new user.
pub struct CreateUserService {
    users: Arc<dyn UserRepository>,
    hash_provider: Arc<dyn HashProvider>,
    cache: Arc<dyn CacheProvider>,
}

impl CreateUserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hash_provider: Arc<dyn HashProvider>,
        cache: Arc<dyn CacheProvider>,
    ) -> Self {
        Self {
            users,
            hash_provider,
            cache,
        }
    }

    /// Creates the user with a hashed password. Every cached providers list
    /// is dropped since the new user is bookable right away.
    pub async fn execute(&self, request: CreateUserRequest) -> ServiceResult<User> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::new("Email address already used.").into());
        }

        let password = self.hash_provider.generate_hash(&request.password).await?;

        let user = self
            .users
            .create(CreateUserData {
                name: request.name,
                email: request.email,
                password,
            })
            .await?;

        if let Err(err) = self.cache.invalidate_prefix(PROVIDERS_LIST_PREFIX).await {
            tracing::warn!(prefix = PROVIDERS_LIST_PREFIX, error = %err, "Failed to invalidate cache");
        }

        tracing::info!(user_id = %user.id, "Created user");

        Ok(user)
    }
}
