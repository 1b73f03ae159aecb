//! Input types for the user services.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request payload for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request payload for opening a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateUserRequest {
    pub email: String,
    pub password: String,
}

/// Input for updating the authenticated user's profile.
#[derive(Debug, Clone)]
pub struct UpdateUserProfileRequest {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub old_password: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserProfileRequest {
    /// Creates a request that only touches name and email.
    pub fn new(user_id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: email.into(),
            old_password: None,
            password: None,
        }
    }

    /// Sets the new password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the current password used to authorize a password change.
    pub fn with_old_password(mut self, old_password: impl Into<String>) -> Self {
        self.old_password = Some(old_password.into());
        self
    }
}

/// Input for replacing a user's avatar with an uploaded file.
#[derive(Debug, Clone)]
pub struct UpdateUserAvatarRequest {
    pub user_id: Uuid,
    pub avatar_filename: String,
}
