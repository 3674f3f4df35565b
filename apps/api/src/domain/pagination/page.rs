use super::cursor::{self, CursorValue};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

/// One page of an ordered collection.
///
/// `edges` and `nodes` hold the same records in the same order; `total_count`
/// covers the whole scoped collection, not just this page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub edges: Vec<Edge<T>>,
    pub nodes: Vec<T>,
    pub total_count: i64,
    pub has_next_page: bool,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            nodes: Vec::new(),
            total_count: 0,
            has_next_page: false,
        }
    }

    /// Cursor of the last edge, the one to send for the next page.
    pub fn end_cursor(&self) -> Option<&str> {
        self.edges.last().map(|edge| edge.cursor.as_str())
    }

    /// Converts every node, keeping cursors and counters as they are.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Page<U> {
        Page {
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge {
                    cursor: edge.cursor,
                    node: f(edge.node),
                })
                .collect(),
            nodes: self.nodes.into_iter().map(&f).collect(),
            total_count: self.total_count,
            has_next_page: self.has_next_page,
        }
    }
}

/// Builds a page from records that are already in their final order.
pub fn assemble<R, K, T>(
    records: Vec<R>,
    total_count: i64,
    has_next_page: bool,
    key_of: impl Fn(&R) -> K,
    threshold_of: impl Fn(&R) -> T,
) -> Page<R>
where
    R: Clone,
    K: CursorValue,
    T: CursorValue,
{
    let edges = records
        .iter()
        .map(|record| Edge {
            cursor: cursor::encode(&key_of(record), &threshold_of(record)),
            node: record.clone(),
        })
        .collect();

    Page {
        edges,
        nodes: records,
        total_count,
        has_next_page,
    }
}
