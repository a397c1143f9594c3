//! Template order entity model and DTOs.
//!
//! Orders are created when a client purchases a template and mutated
//! only through status and note updates; they are never deleted.

use kreatif_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::{TemplateOrderStatus, TemplateTier};

/// A row from the `template_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateOrder {
    pub id: DbId,
    pub order_number: String,
    pub template_id: DbId,
    pub tier: TemplateTier,
    pub client_id: Option<DbId>,
    pub business_name: String,
    pub business_industry: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub brand_colors: serde_json::Value,
    pub logo_url: Option<String>,
    pub images: Vec<String>,
    pub business_description: Option<String>,
    pub special_requests: Option<String>,
    pub business_address: Option<String>,
    pub business_hours: Option<String>,
    pub business_services: Option<String>,
    pub business_slogan: Option<String>,
    pub price: f64,
    pub currency: String,
    pub status: TemplateOrderStatus,
    pub admin_notes: Option<String>,
    pub delivered_url: Option<String>,
    pub payment_method: Option<String>,
    pub payment_reference: Option<String>,
    pub paid_at: Option<Timestamp>,
    pub locale: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An order row joined with its template's name and slug.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderWithTemplate {
    pub id: DbId,
    pub order_number: String,
    pub template_id: DbId,
    pub template_name: Option<String>,
    pub template_slug: Option<String>,
    pub tier: TemplateTier,
    pub client_id: Option<DbId>,
    pub business_name: String,
    pub business_industry: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub business_description: Option<String>,
    pub special_requests: Option<String>,
    pub price: f64,
    pub currency: String,
    pub status: TemplateOrderStatus,
    pub admin_notes: Option<String>,
    pub delivered_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for placing a template order.
///
/// Price, currency, order number and status are assigned server-side;
/// the tier only selects a price, it never carries one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTemplateOrder {
    pub template_id: DbId,
    pub tier: TemplateTier,
    pub client_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub business_name: String,
    pub business_industry: Option<String>,
    #[validate(length(min = 1))]
    pub contact_name: String,
    #[validate(email)]
    pub contact_email: String,
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub brand_colors: serde_json::Value,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub business_description: Option<String>,
    pub special_requests: Option<String>,
    pub business_address: Option<String>,
    pub business_hours: Option<String>,
    pub business_services: Option<String>,
    pub business_slogan: Option<String>,
    /// Defaults to "en" if omitted.
    pub locale: Option<String>,
}
