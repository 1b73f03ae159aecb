use std::sync::Arc;

use chrono::Utc;

use crate::error::{AppError, ServiceResult};
use crate::providers::StorageProvider;
use crate::storage::UserRepository;
use crate::users::{UpdateUserAvatarRequest, User};

/// Replaces a user's avatar with an already uploaded file.
pub struct UpdateUserAvatarService {
    users: Arc<dyn UserRepository>,
    storage: Arc<dyn StorageProvider>,
}

impl UpdateUserAvatarService {
    pub fn new(users: Arc<dyn UserRepository>, storage: Arc<dyn StorageProvider>) -> Self {
        Self { users, storage }
    }

    /// The previous file is deleted before the new one is stored. The two
    /// storage calls and the save are not atomic.
    pub async fn execute(&self, request: UpdateUserAvatarRequest) -> ServiceResult<User> {
        let Some(mut user) = self.users.find_by_id(request.user_id).await? else {
            return Err(
                AppError::unauthorized("Only authenticated users can change avatar.").into(),
            );
        };

        if let Some(previous) = user.avatar.take() {
            self.storage.delete_file(&previous).await?;
        }

        let filename = self.storage.save_file(&request.avatar_filename).await?;

        user.avatar = Some(filename);
        user.updated_at = Utc::now();
        let user = self.users.save(&user).await?;

        tracing::debug!(user_id = %user.id, avatar = ?user.avatar, "Updated avatar");

        Ok(user)
    }
}
