//! Profile service
//!
//! Exact-match lookup of active user profiles.

use std::sync::Arc;

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

/// Service for looking up user profiles
pub struct ProfileService<UR>
where
    UR: UserRepository + ?Sized,
{
    users: Arc<UR>,
}

impl<UR> ProfileService<UR>
where
    UR: UserRepository + ?Sized,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Get an active user by username
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        if username.trim().is_empty() {
            return Err(
                DomainError::InvalidArgument("username must not be empty".to_string()).into(),
            );
        }

        let user = self.users.find_by_username(username).await?;
        Self::active_or_not_found(user, || format!("User '{}' not found", username))
    }

    /// Get an active user by ID
    pub async fn get_by_id(&self, id: &UserId) -> Result<User, AppError> {
        let user = self.users.find_by_id(id).await?;
        Self::active_or_not_found(user, || format!("User {} not found", id))
    }

    fn active_or_not_found(
        user: Option<User>,
        message: impl FnOnce() -> String,
    ) -> Result<User, AppError> {
        match user {
            Some(user) if user.is_active => {
                user.validate()?;
                Ok(user)
            }
            _ => Err(DomainError::NotFound(message()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_user, test_user_named, InMemoryUserRepository};

    fn create_service(repo: InMemoryUserRepository) -> ProfileService<InMemoryUserRepository> {
        ProfileService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn get_by_username_found() {
        let user = test_user_named("dadar");
        let service = create_service(InMemoryUserRepository::new().with_user(user.clone()));

        let found = service.get_by_username("dadar").await.unwrap();

        assert_eq!(found.id, user.id);
        assert_eq!(found.username, "dadar");
    }

    #[tokio::test]
    async fn get_by_username_nonexistent() {
        let service = create_service(InMemoryUserRepository::new().with_user(test_user()));

        let err = service.get_by_username("nonexistent").await.unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_by_username_is_exact_match() {
        let service =
            create_service(InMemoryUserRepository::new().with_user(test_user_named("dadar")));

        assert!(service.get_by_username("Dadar").await.is_err());
        assert!(service.get_by_username("dada").await.is_err());
    }

    #[tokio::test]
    async fn inactive_user_is_not_found() {
        let mut user = test_user_named("sleeper");
        user.is_active = false;
        let service = create_service(InMemoryUserRepository::new().with_user(user.clone()));

        let by_name = service.get_by_username("sleeper").await.unwrap_err();
        let by_id = service.get_by_id(&user.id).await.unwrap_err();

        assert!(matches!(by_name, AppError::Domain(DomainError::NotFound(_))));
        assert!(matches!(by_id, AppError::Domain(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn blank_username_is_invalid() {
        let service = create_service(InMemoryUserRepository::new());

        let err = service.get_by_username("  ").await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn stored_user_without_username_is_invalid_record() {
        let mut user = test_user();
        user.username = String::new();
        let service = create_service(InMemoryUserRepository::new().with_user(user.clone()));

        let err = service.get_by_id(&user.id).await.unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::RecordInvalid(_))));
    }

    #[tokio::test]
    async fn get_by_id_found_and_missing() {
        let user = test_user();
        let service = create_service(InMemoryUserRepository::new().with_user(user.clone()));

        assert_eq!(service.get_by_id(&user.id).await.unwrap().id, user.id);
        assert!(service.get_by_id(&UserId::new()).await.is_err());
    }
}
