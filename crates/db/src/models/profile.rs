//! Profile entity model and DTOs.

use kreatif_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::UserRole;

/// A profile row from the `profiles` table. Aggregate root for a
/// client's projects, invoices, messages and template orders.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Slim profile row for client-selector listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientRef {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// DTO for creating a new profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProfile {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Defaults to CLIENT if omitted.
    pub role: Option<UserRole>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
}

/// DTO for updating an existing profile. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub image: Option<String>,
}
