use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user. Every user can be booked as a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Password hash. Never serialized; deserialized users carry an empty string.
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Stored avatar filename.
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a generated ID. `password` must already be hashed.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the stored avatar filename.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Builds the public URL of the avatar under `base_url`, if one is stored.
    pub fn avatar_url(&self, base_url: &str) -> Option<String> {
        self.avatar
            .as_ref()
            .map(|avatar| format!("{}/files/{}", base_url.trim_end_matches('/'), avatar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_skips_password() {
        let user = User::new("John Doe", "johndoe@example.com", "hashed-secret");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["email"], "johndoe@example.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_avatar_url() {
        let user = User::new("John Doe", "johndoe@example.com", "hash").with_avatar("abc-me.png");

        assert_eq!(
            user.avatar_url("http://localhost:3333/"),
            Some("http://localhost:3333/files/abc-me.png".to_string())
        );
    }

    #[test]
    fn test_avatar_url_without_avatar() {
        let user = User::new("John Doe", "johndoe@example.com", "hash");
        assert_eq!(user.avatar_url("http://localhost:3333"), None);
    }
}
