pub mod classes;
pub mod health;
pub mod transactions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /classes              list, create
/// /classes/{id}         get, update, delete
/// /transactions         list, create
/// /transactions/{id}    update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/classes", classes::router())
        .nest("/transactions", transactions::router())
}
