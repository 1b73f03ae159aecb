//! Avatar upload handler.
//!
//! The multipart field `avatar` is written to the temporary folder under a
//! random prefix, then handed to the avatar service which moves it into
//! storage.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};

use gobarber_core::users::{UpdateUserAvatarRequest, UpdateUserAvatarService};

use super::{views::UserResponse, ApiError};
use crate::{extractors::CurrentUser, state::AppState};

const AVATAR_FIELD: &str = "avatar";

/// Builds a collision-free name for an uploaded file.
fn upload_file_name(original: Option<&str>) -> String {
    let base = original
        .and_then(|name| Path::new(name).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("avatar");

    let prefix: String = rand::random::<[u8; 10]>()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();

    format!("{prefix}-{base}")
}

/// Replace the authenticated user's avatar (PATCH /users/avatar).
pub async fn update_avatar(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UserResponse>, ApiError> {
    let mut uploaded = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.name() != Some(AVATAR_FIELD) {
            continue;
        }

        let file_name = upload_file_name(field.file_name());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let path = state.config.tmp_folder.join(&file_name);
        tokio::fs::write(&path, &bytes).await.map_err(|e| {
            ApiError::internal(format!("Failed to write {}: {e}", path.display()))
        })?;

        uploaded = Some(file_name);
        break;
    }

    let Some(avatar_filename) = uploaded else {
        return Err(ApiError::bad_request("Missing multipart field 'avatar'."));
    };

    let service = UpdateUserAvatarService::new(state.users.clone(), state.storage.clone());
    let result = service
        .execute(UpdateUserAvatarRequest {
            user_id,
            avatar_filename: avatar_filename.clone(),
        })
        .await;

    match result {
        Ok(user) => Ok(Json(UserResponse::new(user, &state.config.app_api_url))),
        Err(err) => {
            // The upload may still sit in the temporary folder.
            let leftover = state.config.tmp_folder.join(&avatar_filename);
            if let Err(e) = tokio::fs::remove_file(&leftover).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(file = %leftover.display(), error = %e, "Failed to remove upload");
                }
            }
            Err(err.into())
        }
    }
}
