use crate::domain::pagination::store::KeysetRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A piece of content published by a user.
///
/// Posts are listed newest first by default and paged by keyset on
/// `(created_at, id)`.
///
/// # Invariants
/// - `id` is unique and is the tie-break key for pagination
/// - `created_at` is set by the store at insert time and never changes; it is
///   not unique, several posts may share the same instant
/// - `author_username` always refers to an existing profile
/// - `title` is 1 to 200 characters, `text` is never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Post {
    /// Unique identifier, UUIDv7
    pub id: Uuid,

    /// Username of the author (profile primary key)
    pub author_username: String,

    /// Headline shown in listings
    pub title: String,

    /// Body of the post
    pub text: String,

    /// Insert time, primary ordering value
    pub created_at: DateTime<Utc>,

    /// Time of the last edit
    pub updated_at: DateTime<Utc>,
}

impl KeysetRecord for Post {
    type Key = Uuid;
    type Threshold = DateTime<Utc>;

    fn tie_break_key(&self) -> Uuid {
        self.id
    }

    fn threshold(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Values supplied by the author when publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub id: Uuid,
    pub author_username: String,
    pub title: String,
    pub text: String,
}

/// Partial edit; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none()
    }
}

/// Restricts a listing to the posts of one author.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorScope(pub String);

impl AuthorScope {
    pub fn username(&self) -> &str {
        &self.0
    }
}
