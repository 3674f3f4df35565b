use super::dto::UpsertProfileInput;
use crate::domain::{
    profile::{entity::Profile, repository::ProfileRepository},
    shared::errors::DomainError,
    user::value_objects::Username,
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

pub struct ProfilesUseCase {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfilesUseCase {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Creates or replaces the caller's profile.
    #[instrument(skip(self, input))]
    pub async fn upsert(
        &self,
        input: UpsertProfileInput,
        caller: &str,
    ) -> Result<Profile, DomainError> {
        input.validate()?;
        self.profiles.upsert(caller, input.bio).await
    }

    pub async fn find(&self, username: &str) -> Result<Profile, DomainError> {
        let username = Username::new(username.to_string())?;
        self.profiles
            .find_by_username(username.as_str())
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("profile {}", username.as_str())))
    }
}
