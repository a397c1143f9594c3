//! Dashboard aggregation handlers.
//!
//! Each dashboard issues its scoped queries concurrently and derives
//! the headline numbers in `kreatif_core::dashboard`; a failure in one
//! query does not cancel its siblings, it fails the response at the
//! HTTP boundary once all have settled.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use kreatif_core::dashboard::{self, DashboardStats};
use kreatif_core::types::DbId;
use kreatif_db::models::project::Project;
use kreatif_db::models::template_order::TemplateOrder;
use kreatif_db::repositories::{
    ContactRepo, InvoiceRepo, MessageRepo, ProfileRepo, ProjectRepo, TemplateOrderRepo,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload for the client dashboard.
#[derive(Debug, Serialize)]
pub struct ClientDashboard {
    pub stats: DashboardStats,
    /// Top 3 projects by `updated_at`, derived from the full fetch.
    pub recent_projects: Vec<Project>,
    /// The capped recent-orders fetch (newest first, at most 3).
    pub recent_template_orders: Vec<TemplateOrder>,
}

/// Headline counts for the admin overview.
#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub total_clients: i64,
    pub active_projects: i64,
    pub pending_invoices: i64,
    pub new_contacts: i64,
    pub unread_messages: i64,
    pub open_template_orders: i64,
}

/// GET /api/v1/clients/{id}/dashboard
///
/// Four independent queries scoped to the client, issued in parallel:
/// all projects, outstanding invoices, the unread-message count, and
/// the 3 most recent template orders.
pub async fn client_dashboard(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ClientDashboard>>> {
    let (projects, outstanding, unread, recent_orders) = tokio::join!(
        ProjectRepo::list_for_client(&state.pool, client_id),
        InvoiceRepo::list_outstanding_for_client(&state.pool, client_id),
        MessageRepo::unread_count_for_user(&state.pool, client_id),
        TemplateOrderRepo::recent_for_client(
            &state.pool,
            client_id,
            dashboard::RECENT_ORDERS_LIMIT
        ),
    );

    let projects = projects?;
    let outstanding = outstanding?;
    let unread = unread?;
    let recent_orders = recent_orders?;

    let stats = DashboardStats {
        active_projects: dashboard::count_active(&projects),
        pending_invoices: outstanding.len() as i64,
        unread_messages: unread,
        // Length of the capped fetch above, not a true total.
        template_orders: recent_orders.len() as i64,
    };

    let recent_projects: Vec<Project> =
        dashboard::recent(&projects, dashboard::RECENT_PROJECTS_SHOWN)
            .into_iter()
            .cloned()
            .collect();

    Ok(Json(DataResponse {
        data: ClientDashboard {
            stats,
            recent_projects,
            recent_template_orders: recent_orders,
        },
    }))
}

/// GET /api/v1/admin/overview
///
/// Six independent count queries, issued in parallel.
pub async fn admin_overview(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<AdminOverview>>> {
    let (clients, projects, invoices, contacts, messages, orders) = tokio::join!(
        ProfileRepo::count_clients(&state.pool),
        ProjectRepo::count_open(&state.pool),
        InvoiceRepo::count_outstanding(&state.pool),
        ContactRepo::count_new(&state.pool),
        MessageRepo::count_unread_inbound(&state.pool),
        TemplateOrderRepo::count_open(&state.pool),
    );

    Ok(Json(DataResponse {
        data: AdminOverview {
            total_clients: clients?,
            active_projects: projects?,
            pending_invoices: invoices?,
            new_contacts: contacts?,
            unread_messages: messages?,
            open_template_orders: orders?,
        },
    }))
}
