use super::storage_error;
use crate::domain::{
    profile::{entity::Profile, repository::ProfileRepository},
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

pub struct SqlxProfileRepository {
    pool: PgPool,
}

impl SqlxProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepository {
    #[instrument(skip(self, bio))]
    async fn upsert(&self, username: &str, bio: Option<String>) -> Result<Profile, DomainError> {
        sqlx::query_as::<_, Profile>(
            r#"INSERT INTO profiles (username, bio)
               VALUES ($1, $2)
               ON CONFLICT (username) DO UPDATE SET bio = EXCLUDED.bio
               RETURNING username, bio"#,
        )
        .bind(username)
        .bind(bio)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to save profile", e))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Profile>, DomainError> {
        sqlx::query_as::<_, Profile>("SELECT username, bio FROM profiles WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to load profile", e))
    }

    async fn find_by_usernames(&self, usernames: &[String]) -> Result<Vec<Profile>, DomainError> {
        if usernames.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, Profile>(
            "SELECT username, bio FROM profiles WHERE username = ANY($1)",
        )
        .bind(usernames)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to load profiles", e))?;

        debug!("Resolved {} of {} profiles", rows.len(), usernames.len());
        Ok(rows)
    }
}
