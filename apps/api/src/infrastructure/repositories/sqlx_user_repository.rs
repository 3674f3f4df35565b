use super::storage_error;
use crate::domain::{
    shared::errors::DomainError,
    user::{entity::User, repository::UserRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

pub struct SqlxUserRepository {
    pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>("SELECT username, password_hash FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to load user", e))
    }

    #[instrument(skip(self, password_hash))]
    async fn create_with_profile(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("Failed to open transaction", e))?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (username, password_hash)
               VALUES ($1, $2)
               RETURNING username, password_hash"#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::Conflict("Username already taken".into())
            }
            other => storage_error("Failed to create user", other),
        })?;

        sqlx::query("INSERT INTO profiles (username, bio) VALUES ($1, NULL)")
            .bind(username)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error("Failed to create profile", e))?;

        tx.commit()
            .await
            .map_err(|e| storage_error("Failed to commit user", e))?;

        info!("Created user {} with empty profile", username);
        Ok(user)
    }

    #[instrument(skip(self, password_hash))]
    async fn set_password_hash(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE username = $1")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to update password", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("user {}", username)));
        }
        Ok(())
    }
}
