//! Login handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use gobarber_core::users::{AuthenticateUserRequest, AuthenticateUserService};

use super::{
    views::{SessionResponse, UserResponse},
    ApiError,
};
use crate::state::AppState;

/// Exchange credentials for a token (POST /sessions).
pub async fn create_session(
    State(state): State<AppState>,
    payload: Result<Json<AuthenticateUserRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let service = AuthenticateUserService::new(
        state.users.clone(),
        state.hash_provider.clone(),
        state.config.token_config(),
    );
    let authenticated = service.execute(request).await?;

    Ok(Json(SessionResponse {
        user: UserResponse::new(authenticated.user, &state.config.app_api_url),
        token: authenticated.token,
    }))
}
