//! Invoice entity model and DTOs.

use chrono::NaiveDate;
use kreatif_core::billing::RevenueLine;
use kreatif_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::InvoiceStatus;

/// An invoice row from the `invoices` table.
///
/// Revenue totals are derived from fetched rows, never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub invoice_number: String,
    pub amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub items: Option<serde_json::Value>,
    pub client_id: DbId,
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An invoice row joined with its client's name and email.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceWithClient {
    pub id: DbId,
    pub invoice_number: String,
    pub amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub items: Option<serde_json::Value>,
    pub client_id: DbId,
    pub client_name: String,
    pub client_email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new invoice. Number, client and a positive amount
/// are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoice {
    #[validate(length(min = 1))]
    pub invoice_number: String,
    #[validate(range(min = 0.01))]
    pub amount: f64,
    /// Defaults to EUR if omitted.
    pub currency: Option<String>,
    /// Defaults to DRAFT if omitted.
    pub status: Option<InvoiceStatus>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    #[validate(range(min = 1))]
    pub client_id: DbId,
    pub project_id: Option<DbId>,
}

impl RevenueLine for InvoiceWithClient {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn is_paid(&self) -> bool {
        self.status.is_paid()
    }

    fn is_outstanding(&self) -> bool {
        self.status.is_outstanding()
    }
}
