use crate::application::{
    list_posts::dto::{ListPostsQuery, PostView},
    manage_posts::dto::{CreatePostInput, RemovedPost, UpdatePostInput},
};
use crate::domain::{pagination::page::Page, post::entity::Post};
use crate::presentation::http::{errors::AppError, middleware::user::require_caller, state::AppState};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode},
};
use uuid::Uuid;

pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> Result<Json<Page<PostView>>, AppError> {
    let Query(query) = query?;
    let loader = state.profile_loader();
    let page = state
        .list_posts()
        .execute(query.into_request(), &loader)
        .await?;
    Ok(Json(page))
}

pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreatePostInput>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let caller = require_caller(&headers, &state.tokens)?;
    let post = state.manage_posts().create(body, &caller).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostView>, AppError> {
    let post = state.manage_posts().find(id).await?;
    let profile = state.profile_loader().load(&post.author_username).await?;
    Ok(Json(PostView { post, profile }))
}

pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePostInput>,
) -> Result<Json<Post>, AppError> {
    let caller = require_caller(&headers, &state.tokens)?;
    Ok(Json(state.manage_posts().update(id, body, &caller).await?))
}

pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<RemovedPost>, AppError> {
    let caller = require_caller(&headers, &state.tokens)?;
    let id = state.manage_posts().remove(id, &caller).await?;
    Ok(Json(RemovedPost { id }))
}
