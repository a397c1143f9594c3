//! Route definitions for the `/clients` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{clients, dashboard};
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET  /                 -> list (slim selector rows)
/// POST /                 -> create
/// GET  /{id}             -> get_by_id
/// PUT  /{id}             -> update
/// GET  /{id}/dashboard   -> client_dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route("/{id}", get(clients::get_by_id).put(clients::update))
        .route("/{id}/dashboard", get(dashboard::client_dashboard))
}
