pub mod auth;
pub mod list_posts;
pub mod loaders;
pub mod manage_posts;
pub mod profiles;
