use crate::{
    application::{
        auth::use_case::AuthUseCase,
        list_posts::use_case::ListPostsUseCase,
        loaders::profile_loader::{ProfileLoader, profile_loader},
        manage_posts::use_case::ManagePostsUseCase,
        profiles::use_case::ProfilesUseCase,
    },
    config::Config,
    domain::{
        post::repository::PostRepository, profile::repository::ProfileRepository,
        user::repository::UserRepository,
    },
    infrastructure::{
        repositories::{
            sqlx_post_repository::SqlxPostRepository,
            sqlx_profile_repository::SqlxProfileRepository,
            sqlx_user_repository::SqlxUserRepository,
        },
        security::tokens::TokenService,
    },
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tokens: TokenService,
}

impl AppState {
    /// Wires the Postgres-backed repositories.
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            users: Arc::new(SqlxUserRepository::new(db.clone())),
            profiles: Arc::new(SqlxProfileRepository::new(db.clone())),
            posts: Arc::new(SqlxPostRepository::new(db.clone())),
            tokens: TokenService::new(config.jwt_secret.clone(), config.jwt_expires_in_seconds),
            db,
            config,
        }
    }

    pub fn auth(&self) -> AuthUseCase {
        AuthUseCase::new(self.users.clone(), self.tokens.clone(), self.config.bcrypt_cost)
    }

    pub fn list_posts(&self) -> ListPostsUseCase {
        ListPostsUseCase::new(self.posts.clone())
    }

    pub fn manage_posts(&self) -> ManagePostsUseCase {
        ManagePostsUseCase::new(self.posts.clone())
    }

    pub fn profiles_use_case(&self) -> ProfilesUseCase {
        ProfilesUseCase::new(self.profiles.clone())
    }

    /// Fresh loader for one request; never stored on the state.
    pub fn profile_loader(&self) -> ProfileLoader {
        profile_loader(self.profiles.clone())
    }
}
