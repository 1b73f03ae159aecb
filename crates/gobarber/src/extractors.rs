//! Axum extractors for authenticated requests.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use gobarber_core::users::verify_token;

use crate::{handlers::ApiError, state::AppState};

/// Extractor for the authenticated user's id. Returns 401 if the bearer
/// token is missing or invalid.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header_value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("JWT token is missing."))?
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid JWT token."))?;

    header_value
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Invalid JWT token."))
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let user_id = verify_token(token, &state.config.app_secret).map_err(|err| {
            tracing::debug!(error = %err, "Rejected bearer token");
            ApiError::unauthorized("Invalid JWT token.")
        })?;

        Ok(CurrentUser(user_id))
    }
}
