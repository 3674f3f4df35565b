use super::entity::Profile;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts the profile or replaces the bio of an existing one.
    async fn upsert(&self, username: &str, bio: Option<String>) -> Result<Profile, DomainError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Profile>, DomainError>;

    /// Batched lookup; missing usernames are simply absent from the result.
    async fn find_by_usernames(&self, usernames: &[String]) -> Result<Vec<Profile>, DomainError>;
}
