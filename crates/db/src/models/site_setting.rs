//! Site settings: generic key/value JSON storage.

use kreatif_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `site_settings` table. One JSON blob per key; writes
/// replace the value for a single key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub id: DbId,
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: Timestamp,
}
