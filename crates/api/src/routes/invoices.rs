//! Route definitions for the `/invoices` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::invoices;
use crate::state::AppState;

/// Routes mounted at `/invoices`.
///
/// ```text
/// GET  /               -> list (with client join + revenue totals)
/// POST /               -> create
/// PUT  /{id}/status    -> set_status (PAID stamps paid_date once)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(invoices::list).post(invoices::create))
        .route("/{id}/status", put(invoices::set_status))
}
