//! Repository for the `invoices` table.

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::invoice::{CreateInvoice, Invoice, InvoiceWithClient};
use crate::models::status::InvoiceStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, invoice_number, amount, currency, status, description, due_date, \
     paid_date, payment_method, items, client_id, project_id, created_at, updated_at";

/// Column list for rows joined with the client profile.
const JOINED_COLUMNS: &str =
    "i.id, i.invoice_number, i.amount, i.currency, i.status, i.description, i.due_date, \
     i.paid_date, i.payment_method, i.items, i.client_id, \
     c.name AS client_name, c.email AS client_email, i.created_at, i.updated_at";

/// Provides CRUD and status operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, returning the created row.
    ///
    /// Currency defaults to EUR and status to DRAFT when omitted.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices
                (invoice_number, amount, currency, status, description, due_date, client_id, project_id)
             VALUES ($1, $2, COALESCE($3, 'EUR'), COALESCE($4, 'DRAFT'::invoice_status), $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(&input.invoice_number)
            .bind(input.amount)
            .bind(&input.currency)
            .bind(input.status)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(input.client_id)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice joined with its client's name and email.
    pub async fn find_with_client(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InvoiceWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM invoices i
             JOIN profiles c ON c.id = i.client_id
             WHERE i.id = $1"
        );
        sqlx::query_as::<_, InvoiceWithClient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all invoices with their clients, newest first.
    pub async fn list_with_clients(pool: &PgPool) -> Result<Vec<InvoiceWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM invoices i
             JOIN profiles c ON c.id = i.client_id
             ORDER BY i.created_at DESC"
        );
        sqlx::query_as::<_, InvoiceWithClient>(&query)
            .fetch_all(pool)
            .await
    }

    /// List a client's outstanding (SENT or OVERDUE) invoices.
    pub async fn list_outstanding_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM invoices WHERE client_id = $1 AND status IN ($2, $3)"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(client_id)
            .bind(InvoiceStatus::Sent)
            .bind(InvoiceStatus::Overdue)
            .fetch_all(pool)
            .await
    }

    /// Set an invoice's status.
    ///
    /// Transitioning to PAID stamps `paid_date` with the current date
    /// unless one is already set; re-applying PAID never overwrites it.
    /// No other status touches `paid_date`.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: InvoiceStatus,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET
                status = $2,
                paid_date = CASE
                    WHEN $2 = 'PAID'::invoice_status THEN COALESCE(paid_date, CURRENT_DATE)
                    ELSE paid_date
                END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Number of outstanding (SENT or OVERDUE) invoices.
    pub async fn count_outstanding(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM invoices WHERE status IN ($1, $2)")
            .bind(InvoiceStatus::Sent)
            .bind(InvoiceStatus::Overdue)
            .fetch_one(pool)
            .await
    }
}
