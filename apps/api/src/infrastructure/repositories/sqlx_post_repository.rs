use super::storage_error;
use crate::domain::{
    pagination::store::{RecordRangeQuery, RecordStore},
    post::{
        entity::{AuthorScope, NewPost, Post, PostChanges},
        repository::PostRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, info, instrument};
use uuid::Uuid;

const POST_COLUMNS: &str = "id, author_username, title, text, created_at, updated_at";

pub struct SqlxPostRepository {
    pool: PgPool,
}

impl SqlxPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `SELECT .. FROM posts` for one page. The author filter wraps the whole
/// keyset disjunction.
pub fn build_range_query(query: &RecordRangeQuery<Post, AuthorScope>) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new("SELECT ");
    qb.push(POST_COLUMNS).push(" FROM posts WHERE TRUE");

    if let Some(scope) = &query.scope {
        qb.push(" AND author_username = ")
            .push_bind(scope.username().to_string());
    }

    if let Some(predicate) = &query.predicate {
        qb.push(" AND (created_at ")
            .push(predicate.comparison.as_sql())
            .push(" ")
            .push_bind(predicate.threshold)
            .push(" OR (created_at = ")
            .push_bind(predicate.threshold)
            .push(" AND id > ")
            .push_bind(predicate.last_id)
            .push("))");
    }

    qb.push(" ORDER BY created_at ")
        .push(query.order.as_sql())
        .push(", id ASC LIMIT ")
        .push_bind(query.fetch_limit);
    qb
}

#[async_trait]
impl RecordStore for SqlxPostRepository {
    type Record = Post;
    type Scope = AuthorScope;

    #[instrument(skip(self, query), fields(limit = query.fetch_limit))]
    async fn range_query(
        &self,
        query: &RecordRangeQuery<Post, AuthorScope>,
    ) -> Result<Vec<Post>, DomainError> {
        let mut qb = build_range_query(query);
        let rows = qb
            .build_query_as::<Post>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to page posts", e))?;

        debug!("Fetched {} posts", rows.len());
        Ok(rows)
    }

    async fn count(&self, scope: Option<&AuthorScope>) -> Result<i64, DomainError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM posts");
        if let Some(scope) = scope {
            qb.push(" WHERE author_username = ").push_bind(scope.username());
        }

        qb.build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to count posts", e))
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    #[instrument(skip(self, post), fields(post_id = %post.id, author = %post.author_username))]
    async fn create(&self, post: &NewPost) -> Result<Post, DomainError> {
        let created = sqlx::query_as::<_, Post>(&format!(
            r#"INSERT INTO posts (id, author_username, title, text)
               VALUES ($1, $2, $3, $4)
               RETURNING {}"#,
            POST_COLUMNS
        ))
        .bind(post.id)
        .bind(&post.author_username)
        .bind(&post.title)
        .bind(&post.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to create post", e))?;

        info!("Stored post {}", created.id);
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        sqlx::query_as::<_, Post>(&format!("SELECT {} FROM posts WHERE id = $1", POST_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to load post", e))
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: Uuid, changes: &PostChanges) -> Result<Option<Post>, DomainError> {
        sqlx::query_as::<_, Post>(&format!(
            r#"UPDATE posts
               SET title = COALESCE($2, title),
                   text = COALESCE($3, text),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {}"#,
            POST_COLUMNS
        ))
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.text.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to update post", e))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to delete post", e))?;
        Ok(result.rows_affected() > 0)
    }
}
