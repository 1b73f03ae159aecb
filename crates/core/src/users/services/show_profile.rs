use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, ServiceResult};
use crate::storage::UserRepository;
use crate::users::User;

pub struct ShowProfileService {
    users: Arc<dyn UserRepository>,
}

impl ShowProfileService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, user_id: Uuid) -> ServiceResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found.").into())
    }
}
