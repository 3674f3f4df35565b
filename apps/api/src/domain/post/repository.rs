use super::entity::{AuthorScope, NewPost, Post, PostChanges};
use crate::domain::{pagination::store::RecordStore, shared::errors::DomainError};
use async_trait::async_trait;
use uuid::Uuid;

/// Post storage. Listing goes through the [`RecordStore`] supertrait.
#[async_trait]
pub trait PostRepository: RecordStore<Record = Post, Scope = AuthorScope> {
    async fn create(&self, post: &NewPost) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    /// Applies the changes and returns the updated post, `None` if it does not exist.
    async fn update(&self, id: Uuid, changes: &PostChanges) -> Result<Option<Post>, DomainError>;

    /// Returns whether a post was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
