use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Public face of a user; created empty at sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Profile {
    pub username: String,
    pub bio: Option<String>,
}
