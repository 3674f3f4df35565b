use super::entity::User;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Creates the user together with an empty profile, atomically.
    ///
    /// Returns `DomainError::Conflict` when the username is taken.
    async fn create_with_profile(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, DomainError>;

    async fn set_password_hash(&self, username: &str, password_hash: &str)
    -> Result<(), DomainError>;
}
