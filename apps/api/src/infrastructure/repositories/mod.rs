pub mod sqlx_post_repository;
pub mod sqlx_profile_repository;
pub mod sqlx_user_repository;

use crate::domain::shared::errors::DomainError;

/// Maps a driver error onto the domain, logging the context it happened in.
pub(crate) fn storage_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!("{}: {}", context, e);
    DomainError::InfrastructureError(format!("{}: {}", context, e))
}
