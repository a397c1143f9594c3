//! Route definitions for the `/contacts` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// GET  /               -> list (with per-status counts)
/// POST /               -> create (public contact form)
/// PUT  /{id}/status    -> set_status
/// PUT  /{id}/notes     -> set_notes (empty normalized to null)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::list).post(contacts::create))
        .route("/{id}/status", put(contacts::set_status))
        .route("/{id}/notes", put(contacts::set_notes))
}
