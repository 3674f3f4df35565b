use crate::application::auth::dto::{AccessToken, AuthInput, CurrentUser};
use crate::presentation::http::{errors::AppError, middleware::user::require_caller, state::AppState};
use axum::{Json, extract::State, http::HeaderMap};
use serde_json::{Value, json};

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<AuthInput>,
) -> Result<Json<AccessToken>, AppError> {
    Ok(Json(state.auth().sign_up(body).await?))
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<AuthInput>,
) -> Result<Json<AccessToken>, AppError> {
    Ok(Json(state.auth().sign_in(body).await?))
}

pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AuthInput>,
) -> Result<Json<Value>, AppError> {
    let caller = require_caller(&headers, &state.tokens)?;
    state.auth().change_password(body, &caller).await?;
    Ok(Json(json!({ "changed": true })))
}

pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CurrentUser>, AppError> {
    let caller = require_caller(&headers, &state.tokens)?;
    let user = state
        .users
        .find_by_username(&caller)
        .await?
        .ok_or(AppError::Unauthorized)?;
    let profile = state.profiles.find_by_username(&user.username).await?;

    Ok(Json(CurrentUser {
        username: user.username,
        profile,
    }))
}
