//! Keyset query planning.
//!
//! A cursor `(last_id, threshold)` selects the records strictly after it:
//!
//! ```text
//! scope AND (threshold <op> :threshold OR (threshold = :threshold AND key > :last_id))
//! ```
//!
//! where `<op>` is `>` for ascending and `<` for descending order. The scope is
//! always conjoined with the whole disjunction so the tie-break branch cannot
//! reach records outside it.

use super::cursor::CursorPosition;
use crate::domain::shared::pagination::SortOrder;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Less,
}

impl Comparison {
    pub fn for_order(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Comparison::Greater,
            SortOrder::Desc => Comparison::Less,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::Less => "<",
        }
    }

    pub fn holds<T: Ord>(&self, lhs: &T, rhs: &T) -> bool {
        match self {
            Comparison::Greater => lhs > rhs,
            Comparison::Less => lhs < rhs,
        }
    }
}

/// Compound "strictly after the cursor" predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysetPredicate<K, T> {
    pub comparison: Comparison,
    pub threshold: T,
    pub last_id: K,
}

impl<K: Ord, T: Ord> KeysetPredicate<K, T> {
    pub fn admits(&self, key: &K, threshold: &T) -> bool {
        self.comparison.holds(threshold, &self.threshold)
            || (threshold == &self.threshold && key > &self.last_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeQuery<K, T, S> {
    pub scope: Option<S>,
    pub order: SortOrder,
    pub predicate: Option<KeysetPredicate<K, T>>,
    /// Page limit plus one.
    pub fetch_limit: i64,
}

impl<K: Ord, T: Ord, S> RangeQuery<K, T, S> {
    /// Whether a record with this key and threshold lies after the cursor.
    /// Scope matching is left to the store.
    pub fn admits(&self, key: &K, threshold: &T) -> bool {
        self.predicate
            .as_ref()
            .is_none_or(|predicate| predicate.admits(key, threshold))
    }

    /// Total order of the result: threshold in `order`, then key ascending.
    pub fn compare(&self, a: (&K, &T), b: (&K, &T)) -> Ordering {
        self.order
            .apply(a.1.cmp(b.1))
            .then_with(|| a.0.cmp(b.0))
    }
}

/// Builds the range query for one page.
pub fn plan<K, T, S>(
    limit: i64,
    order: SortOrder,
    cursor: Option<CursorPosition<K, T>>,
    scope: Option<S>,
) -> RangeQuery<K, T, S> {
    let predicate = cursor.map(|position| KeysetPredicate {
        comparison: Comparison::for_order(order),
        threshold: position.threshold,
        last_id: position.last_id,
    });

    RangeQuery {
        scope,
        order,
        predicate,
        fetch_limit: limit.saturating_add(1),
    }
}

/// Drops the over-fetched record and reports whether it existed.
pub fn split_page<R>(mut records: Vec<R>, limit: i64) -> (Vec<R>, bool) {
    let limit = usize::try_from(limit).unwrap_or(0);
    let has_next_page = records.len() > limit;
    records.truncate(limit);
    (records, has_next_page)
}
