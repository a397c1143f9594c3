//! Contact submission model and DTOs.

use kreatif_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::ContactStatus;

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub message: String,
    pub locale: Option<String>,
    pub status: ContactStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public contact form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub budget: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
    pub locale: Option<String>,
}
