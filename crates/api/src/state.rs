use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` and cheaply cloneable (inner data is behind
/// `Arc` or is already `Clone`). The pool lives here for the process
/// lifetime; there are no module-level globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tasktutor_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
