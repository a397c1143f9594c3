//! Route definitions for site settings.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET /payments            -> get_payment_settings (merged over defaults)
/// PUT /payments/{key}      -> update_payment_setting (one key per write)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payments", get(settings::get_payment_settings))
        .route("/payments/{key}", put(settings::update_payment_setting))
}
