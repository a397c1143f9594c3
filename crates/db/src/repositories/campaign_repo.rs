//! Repository for the `campaigns` table.
//!
//! Two write paths exist on purpose: the draft save pushes every
//! editable field, the active toggle flips exactly one boolean. They
//! are not coordinated; a toggle while a draft edit is unsaved does not
//! carry the draft along.

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::campaign::{Campaign, SaveCampaignDraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, template, title, description, discount_type, discount_value, \
     discount_code, banner_text, banner_color, cta_text, cta_link, placement, active, \
     start_date, end_date, created_at, updated_at";

/// Provides operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// List all campaigns, oldest first (stable grid order).
    pub async fn list(pool: &PgPool) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns ORDER BY created_at ASC");
        sqlx::query_as::<_, Campaign>(&query).fetch_all(pool).await
    }

    /// Find a campaign by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Save a campaign draft: writes every editable field in one call.
    pub async fn update_draft(
        pool: &PgPool,
        id: DbId,
        input: &SaveCampaignDraft,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET
                title = $2,
                description = $3,
                discount_type = $4,
                discount_value = $5,
                discount_code = $6,
                banner_text = $7,
                banner_color = $8,
                cta_text = $9,
                cta_link = $10,
                placement = $11,
                active = $12,
                start_date = $13,
                end_date = $14
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.discount_type)
            .bind(input.discount_value)
            .bind(&input.discount_code)
            .bind(&input.banner_text)
            .bind(&input.banner_color)
            .bind(&input.cta_text)
            .bind(&input.cta_link)
            .bind(input.placement)
            .bind(input.active)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Flip exactly the `active` boolean.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        active: bool,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("UPDATE campaigns SET active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }
}
