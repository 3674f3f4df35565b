/// Account credentials. The username is the identity shared with the
/// user's profile and posts.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}
