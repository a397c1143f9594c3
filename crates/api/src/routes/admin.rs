//! Route definitions for the `/admin` overview.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET /overview    -> admin_overview (six parallel counts)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/overview", get(dashboard::admin_overview))
}
