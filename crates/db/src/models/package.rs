//! Package entity model and DTOs (pricing-page offerings).

use kreatif_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A package row from the `packages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Package {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub currency: String,
    pub features: Vec<String>,
    pub delivery_days: Option<i32>,
    pub color: String,
    pub popular: bool,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new package.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePackage {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Defaults to EUR if omitted.
    pub currency: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub delivery_days: Option<i32>,
    pub color: Option<String>,
    #[serde(default)]
    pub popular: bool,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing package. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePackage {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub features: Option<Vec<String>>,
    pub delivery_days: Option<i32>,
    pub color: Option<String>,
    pub popular: Option<bool>,
    pub sort_order: Option<i32>,
}
