//! Root-level service status routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Status routes mounted at the root (not under `/api`).
///
/// ```text
/// GET /        -> status banner (plain text)
/// GET /health  -> health_check (JSON)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::status))
        .route("/health", get(health::health_check))
}
