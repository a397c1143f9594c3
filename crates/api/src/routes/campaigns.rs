//! Route definitions for the `/campaigns` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::campaigns;
use crate::state::AppState;

/// Routes mounted at `/campaigns`.
///
/// The draft save and the active toggle are deliberately separate
/// write paths; see the handler docs.
///
/// ```text
/// GET /                -> list (oldest first)
/// GET /{id}            -> get_by_id
/// PUT /{id}            -> save_draft (full field set)
/// PUT /{id}/active     -> set_active (single field)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(campaigns::list))
        .route("/{id}", get(campaigns::get_by_id).put(campaigns::save_draft))
        .route("/{id}/active", put(campaigns::set_active))
}
