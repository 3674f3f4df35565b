use crate::domain::shared::errors::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaginationError {
    /// The cursor could not be decoded. Client input error.
    #[error("Malformed cursor: {0}")]
    MalformedCursor(String),

    /// The requested page size is outside the accepted range. Client input error.
    #[error("Limit must be between {min} and {max}, got {requested}")]
    InvalidLimit { requested: i64, min: i64, max: i64 },

    /// The record store failed; carried through untouched.
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(#[from] DomainError),
}

impl PaginationError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PaginationError::MalformedCursor(_) | PaginationError::InvalidLimit { .. }
        )
    }
}
