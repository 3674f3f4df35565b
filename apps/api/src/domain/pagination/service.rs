use super::{
    cursor,
    errors::PaginationError,
    page::{self, Page},
    planner::{plan, split_page},
    store::{KeysetRecord, RecordStore},
};
use crate::domain::shared::pagination::{MAX_PAGE_LIMIT, MIN_PAGE_LIMIT, PaginationRequest};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Serves cursor-paginated pages out of a [`RecordStore`].
pub struct PaginationService<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> PaginationService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches one page.
    ///
    /// The range fetch and the total count run concurrently. Either both
    /// succeed and a page is returned, or the first failure is returned and
    /// the other read is dropped.
    ///
    /// # Errors
    /// - [`PaginationError::InvalidLimit`] when `limit` is outside 1..=100
    /// - [`PaginationError::MalformedCursor`] when the cursor does not decode
    /// - [`PaginationError::StoreUnavailable`] when either read fails
    #[instrument(skip(self, request), fields(
        limit = request.limit,
        order = request.order.as_sql(),
        has_cursor = request.cursor.is_some(),
        scoped = request.scope.is_some()
    ))]
    pub async fn get_page(
        &self,
        request: PaginationRequest<S::Scope>,
    ) -> Result<Page<S::Record>, PaginationError> {
        validate_limit(request.limit)?;

        let position = cursor::decode::<
            <S::Record as KeysetRecord>::Key,
            <S::Record as KeysetRecord>::Threshold,
        >(request.cursor.as_deref())?;

        let query = plan(request.limit, request.order, position, request.scope);

        let (records, total_count) = tokio::try_join!(
            self.store.range_query(&query),
            self.store.count(query.scope.as_ref()),
        )?;

        let fetched = records.len();
        let (records, has_next_page) = split_page(records, request.limit);
        debug!(fetched, total_count, has_next_page, "page fetched");

        Ok(page::assemble(
            records,
            total_count,
            has_next_page,
            <S::Record as KeysetRecord>::tie_break_key,
            <S::Record as KeysetRecord>::threshold,
        ))
    }
}

pub fn validate_limit(limit: i64) -> Result<(), PaginationError> {
    if (MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT).contains(&limit) {
        Ok(())
    } else {
        Err(PaginationError::InvalidLimit {
            requested: limit,
            min: MIN_PAGE_LIMIT,
            max: MAX_PAGE_LIMIT,
        })
    }
}
