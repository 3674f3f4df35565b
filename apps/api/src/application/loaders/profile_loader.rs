use super::batch_loader::{BatchFn, BatchLoader};
use crate::domain::{
    profile::{entity::Profile, repository::ProfileRepository},
    shared::errors::DomainError,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

pub type ProfileLoader = BatchLoader<ProfileBatch>;

/// Batched profile lookup by username.
pub struct ProfileBatch {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileBatch {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl BatchFn for ProfileBatch {
    type Key = String;
    type Value = Profile;

    async fn load(&self, usernames: &[String]) -> Result<HashMap<String, Profile>, DomainError> {
        let profiles = self.profiles.find_by_usernames(usernames).await?;
        Ok(profiles
            .into_iter()
            .map(|profile| (profile.username.clone(), profile))
            .collect())
    }
}

pub fn profile_loader(profiles: Arc<dyn ProfileRepository>) -> ProfileLoader {
    BatchLoader::new(ProfileBatch::new(profiles))
}
