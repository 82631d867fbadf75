//! Handlers for the status banner and health check.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /
///
/// Plain-text banner confirming the server is up.
pub async fn status(State(state): State<AppState>) -> String {
    format!("TaskTutor server is running on port {}", state.config.port)
}

/// GET /health
///
/// Reports process liveness and whether the database answers a trivial
/// query.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = tasktutor_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
