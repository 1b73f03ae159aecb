//! Registration handler.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use gobarber_core::users::{CreateUserRequest, CreateUserService};

use super::{views::UserResponse, ApiError};
use crate::state::AppState;

/// Create a new user (POST /users).
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let service = CreateUserService::new(
        state.users.clone(),
        state.hash_provider.clone(),
        state.cache.clone(),
    );
    let user = service.execute(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse::new(user, &state.config.app_api_url)),
    ))
}
