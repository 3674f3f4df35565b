pub mod pagination;
pub mod post;
pub mod profile;
pub mod shared;
pub mod user;
