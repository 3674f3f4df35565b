use super::dto::PostView;
use crate::application::loaders::profile_loader::ProfileLoader;
use crate::domain::{
    pagination::{errors::PaginationError, page::Page, service::PaginationService},
    post::{entity::AuthorScope, repository::PostRepository},
    shared::pagination::PaginationRequest,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Lists posts page by page, newest first unless asked otherwise.
pub struct ListPostsUseCase {
    pagination: PaginationService<dyn PostRepository>,
}

impl ListPostsUseCase {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            pagination: PaginationService::new(posts),
        }
    }

    /// Fetches one page and resolves every author's profile with one batched
    /// lookup through the request's loader.
    #[instrument(skip(self, request, profiles))]
    pub async fn execute(
        &self,
        request: PaginationRequest<AuthorScope>,
        profiles: &ProfileLoader,
    ) -> Result<Page<PostView>, PaginationError> {
        let page = self.pagination.get_page(request).await?;

        let authors: Vec<String> = page
            .nodes
            .iter()
            .map(|post| post.author_username.clone())
            .collect();

        // The loader coalesces repeated authors into one lookup.
        let resolved = profiles.load_many(&authors).await?;
        let by_author: HashMap<String, _> = authors.into_iter().zip(resolved).collect();

        Ok(page.map(|post| PostView {
            profile: by_author.get(&post.author_username).cloned().flatten(),
            post,
        }))
    }
}
