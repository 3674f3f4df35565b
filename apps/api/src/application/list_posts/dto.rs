use crate::domain::{
    post::entity::{AuthorScope, Post},
    profile::entity::Profile,
    shared::pagination::{DEFAULT_PAGE_LIMIT, PaginationRequest, SortOrder},
};
use serde::{Deserialize, Serialize};

/// Query string of post listings: `?limit=20&cursor=..&order=DESC&author=ana`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<i64>,
    pub cursor: Option<String>,
    pub order: Option<SortOrder>,
    pub author: Option<String>,
}

impl ListPostsQuery {
    pub fn into_request(self) -> PaginationRequest<AuthorScope> {
        PaginationRequest {
            limit: self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            cursor: self.cursor.filter(|c| !c.is_empty()),
            order: self.order.unwrap_or_default(),
            scope: self.author.filter(|a| !a.is_empty()).map(AuthorScope),
        }
    }
}

/// A post as rendered to clients, with its author's profile attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub profile: Option<Profile>,
}
