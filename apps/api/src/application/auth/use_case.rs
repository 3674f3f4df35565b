use super::dto::{AccessToken, AuthInput};
use crate::domain::{shared::errors::DomainError, user::repository::UserRepository};
use crate::infrastructure::security::{
    password::{hash_password, verify_password},
    tokens::TokenService,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

pub struct AuthUseCase {
    users: Arc<dyn UserRepository>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl AuthUseCase {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// Registers a user with an empty profile and signs them in.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn sign_up(&self, input: AuthInput) -> Result<AccessToken, DomainError> {
        input.validate()?;

        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(DomainError::Conflict("Username already taken".into()));
        }

        let password_hash = hash_password(input.password, self.bcrypt_cost).await?;
        let user = self
            .users
            .create_with_profile(&input.username, &password_hash)
            .await?;

        info!("Registered user {}", user.username);
        self.token_for(&user.username)
    }

    /// Exchanges valid credentials for an access token.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn sign_in(&self, input: AuthInput) -> Result<AccessToken, DomainError> {
        let Some(user) = self.users.find_by_username(&input.username).await? else {
            warn!("Sign-in for unknown user");
            return Err(DomainError::Unauthorized);
        };

        if !verify_password(input.password, user.password_hash).await? {
            warn!("Sign-in with wrong password");
            return Err(DomainError::Unauthorized);
        }

        self.token_for(&user.username)
    }

    /// Replaces the caller's password. Callers can only change their own.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn change_password(&self, input: AuthInput, caller: &str) -> Result<(), DomainError> {
        if input.username != caller {
            return Err(DomainError::Forbidden);
        }
        input.validate()?;

        let password_hash = hash_password(input.password, self.bcrypt_cost).await?;
        self.users
            .set_password_hash(&input.username, &password_hash)
            .await
    }

    fn token_for(&self, username: &str) -> Result<AccessToken, DomainError> {
        Ok(AccessToken {
            access_token: self.tokens.issue(username)?,
        })
    }
}
