//! Handlers for the `/invoices` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use kreatif_core::billing;
use kreatif_core::error::CoreError;
use kreatif_core::types::DbId;
use kreatif_db::models::invoice::{CreateInvoice, Invoice, InvoiceWithClient};
use kreatif_db::models::status::InvoiceStatus;
use kreatif_db::repositories::InvoiceRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `PUT /invoices/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetInvoiceStatus {
    pub status: InvoiceStatus,
}

/// Invoice listing with its derived revenue totals.
#[derive(Debug, Serialize)]
pub struct InvoiceList {
    pub invoices: Vec<InvoiceWithClient>,
    /// Sum of PAID amounts. Derived from the fetched rows, never stored.
    pub total_revenue: f64,
    /// Sum of SENT and OVERDUE amounts.
    pub total_pending: f64,
}

/// GET /api/v1/invoices
///
/// All invoices with their clients, newest first, plus revenue totals.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<InvoiceList>>> {
    let invoices = InvoiceRepo::list_with_clients(&state.pool).await?;
    let totals = billing::revenue_totals(&invoices);
    Ok(Json(DataResponse {
        data: InvoiceList {
            invoices,
            total_revenue: totals.total_revenue,
            total_pending: totals.total_pending,
        },
    }))
}

/// POST /api/v1/invoices
///
/// Creating requires an invoice number, a selected client and a
/// positive amount; the response carries the row re-selected with its
/// client join.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInvoice>,
) -> AppResult<(StatusCode, Json<InvoiceWithClient>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let invoice = InvoiceRepo::create(&state.pool, &input).await?;
    let joined = InvoiceRepo::find_with_client(&state.pool, invoice.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id: invoice.id,
        }))?;
    Ok((StatusCode::CREATED, Json(joined)))
}

/// PUT /api/v1/invoices/{id}/status
///
/// Writes the status column; a transition to PAID stamps `paid_date`
/// once and re-applying PAID leaves an existing date untouched.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetInvoiceStatus>,
) -> AppResult<Json<Invoice>> {
    let invoice = InvoiceRepo::set_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice))
}
