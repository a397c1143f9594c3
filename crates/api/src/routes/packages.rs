//! Route definitions for the `/packages` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::packages;
use crate::state::AppState;

/// Routes mounted at `/packages`.
///
/// ```text
/// GET  /               -> list (?include_inactive)
/// POST /               -> create
/// PUT  /{id}           -> update
/// PUT  /{id}/active    -> set_active
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(packages::list).post(packages::create))
        .route("/{id}", put(packages::update))
        .route("/{id}/active", put(packages::set_active))
}
