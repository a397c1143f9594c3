//! Repository for the `contact_submissions` table.

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::contact::{ContactSubmission, CreateContactSubmission};
use crate::models::status::ContactStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, company, phone, service, budget, message, locale, \
     status, notes, created_at, updated_at";

/// Provides operations for contact submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new submission (arrives with status NEW), returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions
                (name, email, company, phone, service, budget, message, locale)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.phone)
            .bind(&input.service)
            .bind(&input.budget)
            .bind(&input.message)
            .bind(&input.locale)
            .fetch_one(pool)
            .await
    }

    /// List all submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Set a submission's triage status. Independent of any reply action.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: ContactStatus,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_submissions SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Replace a submission's free-text notes (pass `None` to clear).
    pub async fn set_notes(
        pool: &PgPool,
        id: DbId,
        notes: Option<&str>,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_submissions SET notes = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }

    /// Number of submissions still in NEW.
    pub async fn count_new(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions WHERE status = $1")
            .bind(ContactStatus::New)
            .fetch_one(pool)
            .await
    }
}
