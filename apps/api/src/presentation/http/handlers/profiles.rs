use crate::application::{
    list_posts::dto::{ListPostsQuery, PostView},
    profiles::dto::UpsertProfileInput,
};
use crate::domain::{pagination::page::Page, post::entity::AuthorScope, profile::entity::Profile};
use crate::presentation::http::{errors::AppError, middleware::user::require_caller, state::AppState};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::HeaderMap,
};

pub async fn upsert_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpsertProfileInput>,
) -> Result<Json<Profile>, AppError> {
    let caller = require_caller(&headers, &state.tokens)?;
    Ok(Json(state.profiles_use_case().upsert(body, &caller).await?))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Profile>, AppError> {
    Ok(Json(state.profiles_use_case().find(&username).await?))
}

/// Posts of one author. Any `author` in the query string is overridden by the path.
pub async fn list_profile_posts(
    State(state): State<AppState>,
    Path(username): Path<String>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> Result<Json<Page<PostView>>, AppError> {
    let Query(query) = query?;
    let profile = state.profiles_use_case().find(&username).await?;

    let request = query.into_request().with_scope(AuthorScope(profile.username));
    let loader = state.profile_loader();
    Ok(Json(state.list_posts().execute(request, &loader).await?))
}
