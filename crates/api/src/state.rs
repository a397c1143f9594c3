use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The pool and config are injected here at startup and passed down
/// explicitly; nothing in the application reaches for a global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: kreatif_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
