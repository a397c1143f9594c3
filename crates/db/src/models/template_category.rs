//! Template category model.
//!
//! Categories are seeded offline (keyed by slug) and read-only from the
//! catalog's perspective.

use kreatif_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `template_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateCategory {
    pub id: DbId,
    /// Unique, stable; referenced by templates and by the catalog filter.
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: String,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
