//! Campaign entity model and DTOs.

use kreatif_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::{CampaignPlacement, DiscountType};

/// A campaign row from the `campaigns` table.
///
/// `active` is independently toggleable per campaign; several campaigns
/// may be active at once.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    /// Campaign-template key (e.g. `winter_sale`, `black_friday`).
    pub template: String,
    pub title: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Option<f64>,
    pub discount_code: Option<String>,
    pub banner_text: Option<String>,
    pub banner_color: String,
    pub cta_text: Option<String>,
    pub cta_link: String,
    pub placement: CampaignPlacement,
    pub active: bool,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a campaign draft.
///
/// The draft editor pushes every editable field in one call; the
/// separate active-toggle writes only `active`. The two paths stay
/// independent by design.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveCampaignDraft {
    pub title: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Option<f64>,
    pub discount_code: Option<String>,
    pub banner_text: Option<String>,
    pub banner_color: String,
    pub cta_text: Option<String>,
    pub cta_link: String,
    pub placement: CampaignPlacement,
    pub active: bool,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// DTO for the single-field active toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCampaignActive {
    pub active: bool,
}
