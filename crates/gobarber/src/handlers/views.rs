//! JSON shapes returned by the API.

use serde::Serialize;

use gobarber_core::users::User;

/// A user as seen by clients: no password, plus the public avatar URL.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(flatten)]
    pub user: User,
    pub avatar_url: Option<String>,
}

impl UserResponse {
    pub fn new(user: User, api_url: &str) -> Self {
        let avatar_url = user.avatar_url(api_url);
        Self { user, avatar_url }
    }
}

/// Response of `POST /sessions`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserResponse,
    pub token: String,
}
