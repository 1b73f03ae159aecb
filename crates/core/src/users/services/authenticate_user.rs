use std::sync::Arc;

use chrono::Utc;

use crate::error::{AppError, ServiceResult};
use crate::providers::HashProvider;
use crate::storage::UserRepository;
use crate::users::{sign_token, AuthenticateUserRequest, TokenConfig, User};

const INVALID_CREDENTIALS: &str = "Incorrect email/password combination.";

/// A user together with a freshly issued session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

/// Opens a session from an email/password pair.
pub struct AuthenticateUserService {
    users: Arc<dyn UserRepository>,
    hash_provider: Arc<dyn HashProvider>,
    token_config: TokenConfig,
}

impl AuthenticateUserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hash_provider: Arc<dyn HashProvider>,
        token_config: TokenConfig,
    ) -> Self {
        Self {
            users,
            hash_provider,
            token_config,
        }
    }

    /// Unknown emails and wrong passwords fail the same way.
    pub async fn execute(&self, request: AuthenticateUserRequest) -> ServiceResult<AuthenticatedUser> {
        let Some(user) = self.users.find_by_email(&request.email).await? else {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS).into());
        };

        let matches = self
            .hash_provider
            .compare_hash(&request.password, &user.password)
            .await?;
        if !matches {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS).into());
        }

        let token = sign_token(user.id, &self.token_config, Utc::now())?;

        tracing::debug!(user_id = %user.id, "Issued session token");

        Ok(AuthenticatedUser { user, token })
    }
}
