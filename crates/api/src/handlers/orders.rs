//! Handlers for the `/orders` resource (template orders).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use kreatif_core::error::CoreError;
use kreatif_core::{naming, pricing};
use kreatif_core::types::DbId;
use kreatif_db::models::message::CreateMessage;
use kreatif_db::models::status::TemplateOrderStatus;
use kreatif_db::models::template_order::{CreateTemplateOrder, OrderWithTemplate, TemplateOrder};
use kreatif_db::repositories::{MessageRepo, ProfileRepo, TemplateOrderRepo, TemplateRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /orders`.
#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// Restrict the listing to one status.
    pub status: Option<TemplateOrderStatus>,
}

/// Body for `PUT /orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetOrderStatus {
    pub status: TemplateOrderStatus,
}

/// Body for `PUT /orders/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct SetOrderNotes {
    pub admin_notes: Option<String>,
}

/// Body for `PUT /orders/{id}/delivered-url`.
#[derive(Debug, Deserialize)]
pub struct SetDeliveredUrl {
    pub delivered_url: Option<String>,
}

/// One row of the per-status count bar.
#[derive(Debug, Serialize)]
pub struct OrderStatusCount {
    pub status: TemplateOrderStatus,
    pub count: i64,
}

/// Order listing with per-status counts across all orders.
#[derive(Debug, Serialize)]
pub struct OrderList {
    pub orders: Vec<OrderWithTemplate>,
    pub status_counts: Vec<OrderStatusCount>,
}

/// GET /api/v1/orders
///
/// Orders with their template, newest first, optionally filtered by
/// status; the counts always cover all orders.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OrderListQuery>,
) -> AppResult<Json<DataResponse<OrderList>>> {
    let (orders, counts) = tokio::join!(
        TemplateOrderRepo::list_with_templates(&state.pool, params.status),
        TemplateOrderRepo::status_counts(&state.pool),
    );

    let status_counts = counts?
        .into_iter()
        .map(|(status, count)| OrderStatusCount { status, count })
        .collect();

    Ok(Json(DataResponse {
        data: OrderList {
            orders: orders?,
            status_counts,
        },
    }))
}

/// POST /api/v1/orders
///
/// Places a template order. The price comes from the compiled-in tier
/// table, never from the caller; the order number is generated here and
/// retried once if it collides. After a successful insert a best-effort
/// notification message is appended to the first admin's thread; a
/// notification failure never fails the order.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTemplateOrder>,
) -> AppResult<(StatusCode, Json<TemplateOrder>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let template = TemplateRepo::find_by_id(&state.pool, input.template_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: input.template_id,
        }))?;

    let price = pricing::tier_price(input.tier.as_str()).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown template tier: {}", input.tier))
    })?;

    let order = insert_with_fresh_number(&state, &input, price).await?;

    notify_admin(&state, &order, &template.name, price).await;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Insert the order, regenerating the order number once if the random
/// suffix collides with an existing one.
async fn insert_with_fresh_number(
    state: &AppState,
    input: &CreateTemplateOrder,
    price: f64,
) -> Result<TemplateOrder, AppError> {
    let number = naming::generate_order_number(chrono::Utc::now());
    match TemplateOrderRepo::create(&state.pool, input, &number, price).await {
        Ok(order) => Ok(order),
        Err(err) if is_unique_violation(&err, "uq_template_orders_number") => {
            let retry = naming::generate_order_number(chrono::Utc::now());
            tracing::warn!(collided = %number, "Order number collision, retrying");
            Ok(TemplateOrderRepo::create(&state.pool, input, &retry, price).await?)
        }
        Err(err) => Err(err.into()),
    }
}

/// Append a new-order notification to the first admin's message thread.
/// Failures are logged and swallowed.
async fn notify_admin(state: &AppState, order: &TemplateOrder, template_name: &str, price: f64) {
    let result = async {
        let Some(admin_id) = ProfileRepo::first_admin(&state.pool).await? else {
            return Ok::<_, sqlx::Error>(());
        };
        MessageRepo::create(
            &state.pool,
            &CreateMessage {
                subject: Some(format!("New Template Order: {}", order.order_number)),
                content: format!(
                    "Template: {template_name}\nTier: {}\nBusiness: {}\nContact: {} ({})\nPrice: EUR {price}",
                    order.tier, order.business_name, order.contact_name, order.contact_email,
                ),
                from_admin: false,
                user_id: admin_id,
            },
        )
        .await?;
        Ok(())
    }
    .await;

    if let Err(err) = result {
        tracing::warn!(error = %err, order = %order.order_number, "Failed to send order notification");
    }
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TemplateOrder>> {
    let order = TemplateOrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TemplateOrder",
            id,
        }))?;
    Ok(Json(order))
}

/// PUT /api/v1/orders/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetOrderStatus>,
) -> AppResult<Json<TemplateOrder>> {
    let order = TemplateOrderRepo::set_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TemplateOrder",
            id,
        }))?;
    Ok(Json(order))
}

/// PUT /api/v1/orders/{id}/notes
pub async fn set_notes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetOrderNotes>,
) -> AppResult<Json<TemplateOrder>> {
    let order = TemplateOrderRepo::set_admin_notes(&state.pool, id, input.admin_notes.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TemplateOrder",
            id,
        }))?;
    Ok(Json(order))
}

/// PUT /api/v1/orders/{id}/delivered-url
pub async fn set_delivered_url(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetDeliveredUrl>,
) -> AppResult<Json<TemplateOrder>> {
    let order =
        TemplateOrderRepo::set_delivered_url(&state.pool, id, input.delivered_url.as_deref())
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "TemplateOrder",
                id,
            }))?;
    Ok(Json(order))
}
