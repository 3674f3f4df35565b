use super::cursor::CursorValue;
use super::planner::RangeQuery;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// A record that can be paged through by keyset.
pub trait KeysetRecord {
    /// Globally unique, totally ordered key used to break ties.
    type Key: CursorValue + Ord + Clone + Send + Sync;

    /// Primary ordering value. Not unique.
    type Threshold: CursorValue + Ord + Clone + Send + Sync;

    fn tie_break_key(&self) -> Self::Key;
    fn threshold(&self) -> Self::Threshold;
}

pub type RecordRangeQuery<R, S> =
    RangeQuery<<R as KeysetRecord>::Key, <R as KeysetRecord>::Threshold, S>;

/// Storage the pagination engine reads from.
#[async_trait]
pub trait RecordStore: Send + Sync {
    type Record: KeysetRecord + Clone + Send + Sync;
    type Scope: Clone + Send + Sync;

    /// Returns at most `query.fetch_limit` records matching the scope and the
    /// keyset predicate, sorted by threshold in `query.order`, then key ascending.
    async fn range_query(
        &self,
        query: &RecordRangeQuery<Self::Record, Self::Scope>,
    ) -> Result<Vec<Self::Record>, DomainError>;

    /// Counts every record in the scope, ignoring any keyset predicate.
    async fn count(&self, scope: Option<&Self::Scope>) -> Result<i64, DomainError>;
}
