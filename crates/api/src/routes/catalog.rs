//! Route definitions for the public template catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET /categories            -> list_categories (active, by sort_order)
/// GET /templates             -> list_templates (?category=&q=)
/// GET /templates/{slug}      -> get_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/templates", get(catalog::list_templates))
        .route("/templates/{slug}", get(catalog::get_template))
}
