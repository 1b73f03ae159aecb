//! Profile handlers for the authenticated user.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use gobarber_core::users::{ShowProfileService, UpdateUserProfileRequest, UpdateUserProfileService};

use super::{views::UserResponse, ApiError};
use crate::{extractors::CurrentUser, state::AppState};

/// Body of `PUT /profile`.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileBody {
    pub name: String,
    pub email: String,
    pub old_password: Option<String>,
    pub password: Option<String>,
}

/// Show the authenticated user (GET /profile).
pub async fn show_profile(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = ShowProfileService::new(state.users.clone())
        .execute(user_id)
        .await?;

    Ok(Json(UserResponse::new(user, &state.config.app_api_url)))
}

/// Update name, email and optionally password (PUT /profile).
pub async fn update_profile(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<UpdateProfileBody>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let request = UpdateUserProfileRequest {
        user_id,
        name: body.name,
        email: body.email,
        old_password: body.old_password,
        password: body.password,
    };

    let service = UpdateUserProfileService::new(state.users.clone(), state.hash_provider.clone());
    let user = service.execute(request).await?;

    Ok(Json(UserResponse::new(user, &state.config.app_api_url)))
}
