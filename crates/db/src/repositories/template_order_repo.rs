//! Repository for the `template_orders` table.
//!
//! Orders are append-and-update only; there is no delete path.

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::status::TemplateOrderStatus;
use crate::models::template_order::{CreateTemplateOrder, OrderWithTemplate, TemplateOrder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, order_number, template_id, tier, client_id, business_name, \
     business_industry, contact_name, contact_email, contact_phone, brand_colors, logo_url, \
     images, business_description, special_requests, business_address, business_hours, \
     business_services, business_slogan, price, currency, status, admin_notes, delivered_url, \
     payment_method, payment_reference, paid_at, locale, created_at, updated_at";

/// Column list for admin rows joined with the template.
const JOINED_COLUMNS: &str =
    "o.id, o.order_number, o.template_id, t.name AS template_name, t.slug AS template_slug, \
     o.tier, o.client_id, o.business_name, o.business_industry, o.contact_name, \
     o.contact_email, o.contact_phone, o.business_description, o.special_requests, o.price, \
     o.currency, o.status, o.admin_notes, o.delivered_url, o.created_at, o.updated_at";

/// Provides operations for template orders.
pub struct TemplateOrderRepo;

impl TemplateOrderRepo {
    /// Insert a new order with a server-assigned order number and price,
    /// returning the created row. New orders start PENDING in EUR.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTemplateOrder,
        order_number: &str,
        price: f64,
    ) -> Result<TemplateOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO template_orders
                (order_number, template_id, tier, client_id, business_name, business_industry,
                 contact_name, contact_email, contact_phone, brand_colors, logo_url, images,
                 business_description, special_requests, business_address, business_hours,
                 business_services, business_slogan, price, locale)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     $13, $14, $15, $16, $17, $18, $19, COALESCE($20, 'en'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateOrder>(&query)
            .bind(order_number)
            .bind(input.template_id)
            .bind(input.tier)
            .bind(input.client_id)
            .bind(&input.business_name)
            .bind(&input.business_industry)
            .bind(&input.contact_name)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(&input.brand_colors)
            .bind(&input.logo_url)
            .bind(&input.images)
            .bind(&input.business_description)
            .bind(&input.special_requests)
            .bind(&input.business_address)
            .bind(&input.business_hours)
            .bind(&input.business_services)
            .bind(&input.business_slogan)
            .bind(price)
            .bind(&input.locale)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TemplateOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM template_orders WHERE id = $1");
        sqlx::query_as::<_, TemplateOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List orders with their template, newest first, optionally
    /// restricted to one status.
    pub async fn list_with_templates(
        pool: &PgPool,
        status: Option<TemplateOrderStatus>,
    ) -> Result<Vec<OrderWithTemplate>, sqlx::Error> {
        let filter = if status.is_some() {
            "WHERE o.status = $1"
        } else {
            ""
        };
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM template_orders o
             LEFT JOIN templates t ON t.id = o.template_id
             {filter}
             ORDER BY o.created_at DESC"
        );
        let mut q = sqlx::query_as::<_, OrderWithTemplate>(&query);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// A client's most recent orders, newest first, capped at `limit`.
    pub async fn recent_for_client(
        pool: &PgPool,
        client_id: DbId,
        limit: i64,
    ) -> Result<Vec<TemplateOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM template_orders
             WHERE client_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, TemplateOrder>(&query)
            .bind(client_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Set an order's status. Writes exactly the status column.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: TemplateOrderStatus,
    ) -> Result<Option<TemplateOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE template_orders SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateOrder>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Replace an order's admin notes (pass `None` to clear).
    pub async fn set_admin_notes(
        pool: &PgPool,
        id: DbId,
        notes: Option<&str>,
    ) -> Result<Option<TemplateOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE template_orders SET admin_notes = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateOrder>(&query)
            .bind(id)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }

    /// Replace an order's delivered-site URL (pass `None` to clear).
    pub async fn set_delivered_url(
        pool: &PgPool,
        id: DbId,
        url: Option<&str>,
    ) -> Result<Option<TemplateOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE template_orders SET delivered_url = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateOrder>(&query)
            .bind(id)
            .bind(url)
            .fetch_optional(pool)
            .await
    }

    /// Per-status order counts (for the admin filter bar).
    pub async fn status_counts(
        pool: &PgPool,
    ) -> Result<Vec<(TemplateOrderStatus, i64)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT status, COUNT(*) FROM template_orders GROUP BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Number of orders still needing admin attention
    /// (PENDING or IN_PROGRESS).
    pub async fn count_open(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM template_orders WHERE status IN ($1, $2)",
        )
        .bind(TemplateOrderStatus::Pending)
        .bind(TemplateOrderStatus::InProgress)
        .fetch_one(pool)
        .await
    }
}
