//! Template entity model.

use kreatif_core::catalog::CatalogEntry;
use kreatif_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::status::TemplateTier;

/// A template row from the `templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub thumbnail_url: Option<String>,
    pub preview_url: Option<String>,
    pub preview_images: Vec<String>,
    pub features: Vec<String>,
    pub pages_included: i32,
    pub tier_compatibility: Vec<TemplateTier>,
    pub demo_data: serde_json::Value,
    pub popular: bool,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A template row joined (LEFT) with its category's slug, name and
/// color. The category columns are `None` when the join does not
/// resolve; such rows drop out of any category-filtered view but still
/// appear unfiltered.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateWithCategory {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub thumbnail_url: Option<String>,
    pub preview_url: Option<String>,
    pub preview_images: Vec<String>,
    pub features: Vec<String>,
    pub pages_included: i32,
    pub tier_compatibility: Vec<TemplateTier>,
    pub popular: bool,
    pub sort_order: i32,
    pub category_slug: Option<String>,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
}

impl CatalogEntry for TemplateWithCategory {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn category_slug(&self) -> Option<&str> {
        self.category_slug.as_deref()
    }
}
