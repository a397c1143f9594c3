//! Repository for the `template_categories` table.

use std::collections::HashMap;

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::template_category::TemplateCategory;
use crate::seed::CategorySeed;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, slug, name, description, icon, color, sort_order, active, created_at, updated_at";

/// Provides read and seed operations for template categories.
pub struct TemplateCategoryRepo;

impl TemplateCategoryRepo {
    /// List active categories in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<TemplateCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM template_categories WHERE active = TRUE ORDER BY sort_order ASC"
        );
        sqlx::query_as::<_, TemplateCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Map of category slug to internal ID, across all categories.
    pub async fn slug_map(pool: &PgPool) -> Result<HashMap<String, DbId>, sqlx::Error> {
        let rows: Vec<(String, DbId)> =
            sqlx::query_as("SELECT slug, id FROM template_categories")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().collect())
    }

    /// Upsert a seed category, keyed by slug. Re-running the seed
    /// refreshes the row instead of duplicating it.
    pub async fn upsert_seed(
        pool: &PgPool,
        seed: &CategorySeed,
    ) -> Result<TemplateCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO template_categories
                (slug, name, description, icon, color, sort_order, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (slug) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                icon = EXCLUDED.icon,
                color = EXCLUDED.color,
                sort_order = EXCLUDED.sort_order,
                active = EXCLUDED.active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateCategory>(&query)
            .bind(seed.slug)
            .bind(seed.name)
            .bind(seed.description)
            .bind(seed.icon)
            .bind(seed.color)
            .bind(seed.sort_order)
            .bind(seed.active)
            .fetch_one(pool)
            .await
    }
}
