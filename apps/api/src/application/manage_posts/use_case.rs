use super::dto::{CreatePostInput, UpdatePostInput};
use crate::domain::{
    post::{
        entity::{NewPost, Post, PostChanges},
        repository::PostRepository,
    },
    shared::errors::DomainError,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Create, read, edit and delete single posts. Edits are reserved to the author.
pub struct ManagePostsUseCase {
    posts: Arc<dyn PostRepository>,
}

impl ManagePostsUseCase {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreatePostInput, author: &str) -> Result<Post, DomainError> {
        input.validate()?;

        let post = self
            .posts
            .create(&NewPost {
                id: Uuid::now_v7(),
                author_username: author.to_string(),
                title: input.title,
                text: input.text,
            })
            .await?;

        info!("Post {} published by {}", post.id, author);
        Ok(post)
    }

    pub async fn find(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post {}", id)))
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdatePostInput,
        caller: &str,
    ) -> Result<Post, DomainError> {
        input.validate()?;
        let existing = self.owned_by(id, caller).await?;

        let changes = PostChanges {
            title: input.title,
            text: input.text,
        };
        if changes.is_empty() {
            return Ok(existing);
        }

        self.posts
            .update(id, &changes)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post {}", id)))
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid, caller: &str) -> Result<Uuid, DomainError> {
        self.owned_by(id, caller).await?;

        if !self.posts.delete(id).await? {
            return Err(DomainError::NotFound(format!("post {}", id)));
        }

        info!("Post {} removed by {}", id, caller);
        Ok(id)
    }

    async fn owned_by(&self, id: Uuid, caller: &str) -> Result<Post, DomainError> {
        let post = self.find(id).await?;
        if post.author_username != caller {
            return Err(DomainError::Forbidden);
        }
        Ok(post)
    }
}
