use std::sync::Arc;

use chrono::Utc;

use crate::error::{AppError, ServiceResult};
use crate::providers::HashProvider;
use crate::storage::UserRepository;
use crate::users::{UpdateUserProfileRequest, User};

/// Updates the name, email and optionally the password of a user.
pub struct UpdateUserProfileService {
    users: Arc<dyn UserRepository>,
    hash_provider: Arc<dyn HashProvider>,
}

impl UpdateUserProfileService {
    pub fn new(users: Arc<dyn UserRepository>, hash_provider: Arc<dyn HashProvider>) -> Self {
        Self {
            users,
            hash_provider,
        }
    }

    /// Changing the password requires the current one.
    ///
    /// # Errors
    ///
    /// - `User not found.` (401) for an unknown user.
    /// - `E-mail already in use.` (409) when another user owns the email.
    /// - 400 when a new password comes without the old one, or the old one
    ///   does not match.
    pub async fn execute(&self, request: UpdateUserProfileRequest) -> ServiceResult<User> {
        let Some(mut user) = self.users.find_by_id(request.user_id).await? else {
            return Err(AppError::unauthorized("User not found.").into());
        };

        if let Some(owner) = self.users.find_by_email(&request.email).await? {
            if owner.id != user.id {
                return Err(AppError::with_status("E-mail already in use.", 409).into());
            }
        }

        user.name = request.name;
        user.email = request.email;

        if let Some(password) = request.password {
            let Some(old_password) = request.old_password else {
                return Err(AppError::new(
                    "You need to inform the old password to set a new password.",
                )
                .into());
            };

            let matches = self
                .hash_provider
                .compare_hash(&old_password, &user.password)
                .await?;
            if !matches {
                return Err(AppError::new("Old password does not match.").into());
            }

            user.password = self.hash_provider.generate_hash(&password).await?;
        }

        user.updated_at = Utc::now();
        let user = self.users.save(&user).await?;

        tracing::debug!(user_id = %user.id, "Updated profile");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FakeHashProvider, FakeUsersRepository};
    use crate::storage::CreateUserData;
    use uuid::Uuid;

    async fn register(users: &FakeUsersRepository, name: &str, email: &str) -> User {
        users
            .create(CreateUserData {
                name: name.to_string(),
                email: email.to_string(),
                password: "123456".to_string(),
            })
            .await
            .unwrap()
    }

    fn setup() -> (Arc<FakeUsersRepository>, UpdateUserProfileService) {
        let users = Arc::new(FakeUsersRepository::new());
        let service = UpdateUserProfileService::new(users.clone(), Arc::new(FakeHashProvider));
        (users, service)
    }

    #[tokio::test]
    async fn test_updates_name_and_email() {
        let (users, service) = setup();
        let user = register(&users, "John Doe", "johndoe@example.com").await;

        let updated = service
            .execute(UpdateUserProfileRequest::new(user.id, "John Trê", "johntre@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.name, "John Trê");
        assert_eq!(updated.email, "johntre@example.com");
        assert_eq!(updated.password, "123456");
        assert_eq!(users.find_by_id(user.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_keeping_own_email_is_allowed() {
        let (users, service) = setup();
        let user = register(&users, "John Doe", "johndoe@example.com").await;

        let updated = service
            .execute(UpdateUserProfileRequest::new(user.id, "John", "johndoe@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.name, "John");
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let (_, service) = setup();

        let err = service
            .execute(UpdateUserProfileRequest::new(Uuid::new_v4(), "Ghost", "ghost@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 401);
        assert_eq!(err.to_string(), "User not found.");
    }

    #[tokio::test]
    async fn test_rejects_email_of_another_user() {
        let (users, service) = setup();
        register(&users, "John Doe", "johndoe@example.com").await;
        let user = register(&users, "Test", "test@example.com").await;

        let err = service
            .execute(UpdateUserProfileRequest::new(user.id, "Test", "johndoe@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 409);
        assert_eq!(err.to_string(), "E-mail already in use.");
    }

    #[tokio::test]
    async fn test_updates_password_with_old_password() {
        let (users, service) = setup();
        let user = register(&users, "John Doe", "johndoe@example.com").await;

        let updated = service
            .execute(
                UpdateUserProfileRequest::new(user.id, "John Doe", "johndoe@example.com")
                    .with_old_password("123456")
                    .with_password("123123"),
            )
            .await
            .unwrap();

        assert_eq!(updated.password, "123123");

        let stored = users.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.password, "123123");
        assert!(service
            .hash_provider
            .compare_hash("123123", &stored.password)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_rejects_new_password_without_old_password() {
        let (users, service) = setup();
        let user = register(&users, "John Doe", "johndoe@example.com").await;

        let err = service
            .execute(
                UpdateUserProfileRequest::new(user.id, "John Doe", "johndoe@example.com")
                    .with_password("123123"),
            )
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(
            users.find_by_id(user.id).await.unwrap().unwrap().password,
            "123456"
        );
    }

    #[tokio::test]
    async fn test_rejects_wrong_old_password() {
        let (users, service) = setup();
        let user = register(&users, "John Doe", "johndoe@example.com").await;

        let err = service
            .execute(
                UpdateUserProfileRequest::new(user.id, "John Doe", "johndoe@example.com")
                    .with_old_password("wrong-old-password")
                    .with_password("123123"),
            )
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Old password does not match.");
    }
}
