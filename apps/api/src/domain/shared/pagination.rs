use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ts_rs::TS;

/// Smallest page a client may request.
pub const MIN_PAGE_LIMIT: i64 = 1;

/// Largest page a client may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Direction of the primary (threshold) ordering.
///
/// The tie-break key is always ascending, whatever the direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Applies the direction to an ascending comparison.
    pub fn apply(&self, ascending: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ascending,
            SortOrder::Desc => ascending.reverse(),
        }
    }
}

/// Parameters of a single page request, scoped by `S` (for posts, the author).
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationRequest<S> {
    pub limit: i64,
    pub cursor: Option<String>,
    pub order: SortOrder,
    pub scope: Option<S>,
}

impl<S> Default for PaginationRequest<S> {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            cursor: None,
            order: SortOrder::default(),
            scope: None,
        }
    }
}

impl<S> PaginationRequest<S> {
    pub fn with_scope(mut self, scope: S) -> Self {
        self.scope = Some(scope);
        self
    }
}
