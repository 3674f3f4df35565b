use super::{
    handlers::{auth, health, posts, profiles},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/api/v1/auth/sign-up", post(auth::sign_up))
        .route("/api/v1/auth/sign-in", post(auth::sign_in))
        .route("/api/v1/auth/change-password", post(auth::change_password))
        .route("/api/v1/auth/me", get(auth::me));

    let post_routes = Router::new()
        .route("/api/v1/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/api/v1/posts/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        );

    let profile_routes = Router::new()
        .route("/api/v1/profiles/me", put(profiles::upsert_my_profile))
        .route("/api/v1/profiles/{username}", get(profiles::get_profile))
        .route(
            "/api/v1/profiles/{username}/posts",
            get(profiles::list_profile_posts),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth_routes)
        .merge(post_routes)
        .merge(profile_routes)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
