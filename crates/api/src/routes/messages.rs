//! Route definitions for the `/messages` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// GET  /threads                    -> list_threads (grouped per user)
/// POST /threads/{user_id}/read     -> mark_thread_read (batch)
/// POST /threads/{user_id}/reply    -> reply (append, from_admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/threads", get(messages::list_threads))
        .route("/threads/{user_id}/read", post(messages::mark_thread_read))
        .route("/threads/{user_id}/reply", post(messages::reply))
}
