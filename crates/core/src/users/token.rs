//! JWT issuing and verification for user sessions.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while issuing or checking a session token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Sign(String),
    #[error("invalid token: {0}")]
    Invalid(String),
}

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// The authenticated user's ID.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signing secret and lifetime of issued tokens.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub expires_in: Duration,
}

/// Signs an HS256 token for `user_id`, valid from `issued_at` for `config.expires_in`.
pub fn sign_token(
    user_id: Uuid,
    config: &TokenConfig,
    issued_at: DateTime<Utc>,
) -> Result<String, TokenError> {
    let iat = issued_at.timestamp();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        iat,
        exp: iat + config.expires_in.as_secs() as i64,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Sign(e.to_string()))
}

/// Verifies signature and expiry of `token` and returns the user ID it was issued for.
pub fn verify_token(token: &str, secret: &str) -> Result<Uuid, TokenError> {
    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| TokenError::Invalid(e.to_string()))?;

    Uuid::parse_str(&data.claims.sub).map_err(|e| TokenError::Invalid(e.to_string()))
}
