//! Route definitions for the `/orders` resource (template orders).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET  /                     -> list (?status=, with status counts)
/// POST /                     -> create (client order placement)
/// GET  /{id}                 -> get_by_id
/// PUT  /{id}/status          -> set_status
/// PUT  /{id}/notes           -> set_notes (admin_notes)
/// PUT  /{id}/delivered-url   -> set_delivered_url
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list).post(orders::create))
        .route("/{id}", get(orders::get_by_id))
        .route("/{id}/status", put(orders::set_status))
        .route("/{id}/notes", put(orders::set_notes))
        .route("/{id}/delivered-url", put(orders::set_delivered_url))
}
