//! Repository for the `templates` table.

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::template::{Template, TemplateWithCategory};
use crate::seed::TemplateSeed;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, description, category_id, thumbnail_url, preview_url, \
     preview_images, features, pages_included, tier_compatibility, demo_data, popular, active, \
     sort_order, created_at, updated_at";

/// Column list for catalog rows left-joined with their category.
const CATALOG_COLUMNS: &str =
    "t.id, t.slug, t.name, t.description, t.category_id, t.thumbnail_url, t.preview_url, \
     t.preview_images, t.features, t.pages_included, t.tier_compatibility, t.popular, \
     t.sort_order, c.slug AS category_slug, c.name AS category_name, c.color AS category_color";

/// Provides read and seed operations for templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// List active templates joined with their categories, in display
    /// order. The join is LEFT so a template whose category row is
    /// missing still appears (with `None` category fields).
    pub async fn list_active_with_category(
        pool: &PgPool,
    ) -> Result<Vec<TemplateWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {CATALOG_COLUMNS} FROM templates t
             LEFT JOIN template_categories c ON c.id = t.category_id
             WHERE t.active = TRUE
             ORDER BY t.sort_order ASC"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one active template by slug, with its category.
    pub async fn find_by_slug_with_category(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<TemplateWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {CATALOG_COLUMNS} FROM templates t
             LEFT JOIN template_categories c ON c.id = t.category_id
             WHERE t.slug = $1 AND t.active = TRUE"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a template by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert a seed template, keyed by slug, against a resolved
    /// category ID.
    pub async fn upsert_seed(
        pool: &PgPool,
        seed: &TemplateSeed,
        category_id: DbId,
    ) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates
                (slug, name, description, category_id, thumbnail_url, preview_url,
                 preview_images, features, pages_included, tier_compatibility,
                 popular, active, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             ON CONFLICT (slug) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                category_id = EXCLUDED.category_id,
                thumbnail_url = EXCLUDED.thumbnail_url,
                preview_url = EXCLUDED.preview_url,
                preview_images = EXCLUDED.preview_images,
                features = EXCLUDED.features,
                pages_included = EXCLUDED.pages_included,
                tier_compatibility = EXCLUDED.tier_compatibility,
                popular = EXCLUDED.popular,
                active = EXCLUDED.active,
                sort_order = EXCLUDED.sort_order
             RETURNING {COLUMNS}"
        );
        let thumbnail_url = seed.thumbnail_url();
        let preview_images = seed.preview_images();
        let features: Vec<String> = seed.features.iter().map(|s| s.to_string()).collect();
        let tiers = seed.tier_compatibility.to_vec();

        sqlx::query_as::<_, Template>(&query)
            .bind(seed.slug)
            .bind(seed.name)
            .bind(seed.description)
            .bind(category_id)
            .bind(thumbnail_url)
            .bind(seed.preview_url)
            .bind(&preview_images)
            .bind(&features)
            .bind(seed.pages_included)
            .bind(&tiers)
            .bind(seed.popular)
            .bind(seed.active)
            .bind(seed.sort_order)
            .fetch_one(pool)
            .await
    }
}
