//! Handlers for the `/contacts` resource (contact submissions).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use kreatif_core::error::CoreError;
use kreatif_core::types::DbId;
use kreatif_db::models::contact::{ContactSubmission, CreateContactSubmission};
use kreatif_db::models::status::ContactStatus;
use kreatif_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `PUT /contacts/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetContactStatus {
    pub status: ContactStatus,
}

/// Body for `PUT /contacts/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct SetContactNotes {
    pub notes: Option<String>,
}

/// Per-status submission counts for the console filter bar.
#[derive(Debug, Serialize)]
pub struct ContactStatusCounts {
    pub new: usize,
    pub read: usize,
    pub replied: usize,
    pub archived: usize,
}

/// Contact listing with its derived status counts.
#[derive(Debug, Serialize)]
pub struct ContactList {
    pub contacts: Vec<ContactSubmission>,
    pub status_counts: ContactStatusCounts,
}

fn count_status(contacts: &[ContactSubmission], status: ContactStatus) -> usize {
    contacts.iter().filter(|c| c.status == status).count()
}

/// GET /api/v1/contacts
///
/// All submissions, newest first, with per-status counts derived from
/// the full list.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<ContactList>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    let status_counts = ContactStatusCounts {
        new: count_status(&contacts, ContactStatus::New),
        read: count_status(&contacts, ContactStatus::Read),
        replied: count_status(&contacts, ContactStatus::Replied),
        archived: count_status(&contacts, ContactStatus::Archived),
    };
    Ok(Json(DataResponse {
        data: ContactList {
            contacts,
            status_counts,
        },
    }))
}

/// POST /api/v1/contacts
///
/// Public contact form; new submissions arrive with status NEW.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactSubmission>,
) -> AppResult<(StatusCode, Json<ContactSubmission>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let contact = ContactRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /api/v1/contacts/{id}/status
///
/// Triage status is settable independently of any reply action.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetContactStatus>,
) -> AppResult<Json<ContactSubmission>> {
    let contact = ContactRepo::set_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactSubmission",
            id,
        }))?;
    Ok(Json(contact))
}

/// PUT /api/v1/contacts/{id}/notes
///
/// Replaces the free-text notes. Whitespace-only input is normalized to
/// null.
pub async fn set_notes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetContactNotes>,
) -> AppResult<Json<ContactSubmission>> {
    let notes = input
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    let contact = ContactRepo::set_notes(&state.pool, id, notes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactSubmission",
            id,
        }))?;
    Ok(Json(contact))
}
