//! Opaque continuation tokens for keyset pagination.
//!
//! A cursor is `base64url(json)` of `{ "v": 1, "lastId": .., "threshold": .. }`.
//! Clients must treat it as opaque: the payload layout is versioned and may
//! change, in which case older cursors are rejected as malformed instead of
//! being misread.

use super::errors::PaginationError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as base64url;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

/// Payload layout version written into every cursor.
pub const CURSOR_VERSION: u8 = 1;

/// Values that can travel inside a cursor.
///
/// `decode_value(encode_value(v)) == Some(v)` must hold for every value.
pub trait CursorValue: Sized {
    fn encode_value(&self) -> String;
    fn decode_value(raw: &str) -> Option<Self>;
}

impl CursorValue for Uuid {
    fn encode_value(&self) -> String {
        self.hyphenated().to_string()
    }

    fn decode_value(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok()
    }
}

impl CursorValue for DateTime<Utc> {
    fn encode_value(&self) -> String {
        // AutoSi keeps every non-zero fractional digit, so equality survives the trip.
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn decode_value(raw: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl CursorValue for i64 {
    fn encode_value(&self) -> String {
        self.to_string()
    }

    fn decode_value(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl CursorValue for String {
    fn encode_value(&self) -> String {
        self.clone()
    }

    fn decode_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Decoded position of the last record on the previous page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPosition<K, T> {
    pub last_id: K,
    pub threshold: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CursorPayload {
    v: u8,
    last_id: String,
    threshold: String,
}

/// Encodes the tie-break key and threshold of a record into a cursor.
pub fn encode<K: CursorValue, T: CursorValue>(last_id: &K, threshold: &T) -> String {
    let payload = json!({
        "v": CURSOR_VERSION,
        "lastId": last_id.encode_value(),
        "threshold": threshold.encode_value(),
    });
    base64url.encode(payload.to_string())
}

/// Decodes a cursor issued by [`encode`].
///
/// `None` means "start from the beginning". Anything that is not a cursor of
/// the current version yields [`PaginationError::MalformedCursor`].
pub fn decode<K: CursorValue, T: CursorValue>(
    cursor: Option<&str>,
) -> Result<Option<CursorPosition<K, T>>, PaginationError> {
    let Some(cursor) = cursor else {
        return Ok(None);
    };

    let bytes = base64url
        .decode(cursor.trim())
        .map_err(|e| PaginationError::MalformedCursor(format!("not base64url: {}", e)))?;
    let payload: CursorPayload = serde_json::from_slice(&bytes)
        .map_err(|e| PaginationError::MalformedCursor(format!("unreadable payload: {}", e)))?;

    if payload.v != CURSOR_VERSION {
        return Err(PaginationError::MalformedCursor(format!(
            "unsupported cursor version {}",
            payload.v
        )));
    }

    let last_id = K::decode_value(&payload.last_id)
        .ok_or_else(|| PaginationError::MalformedCursor("invalid lastId".into()))?;
    let threshold = T::decode_value(&payload.threshold)
        .ok_or_else(|| PaginationError::MalformedCursor("invalid threshold".into()))?;

    Ok(Some(CursorPosition { last_id, threshold }))
}
