//! Route definitions for the budget transaction ledger.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::transactions;
use crate::state::AppState;

/// Transaction ledger routes mounted at `/transactions`.
///
/// There is deliberately no get-by-id route; single items are read via
/// the list.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(transactions::list).post(transactions::create))
        .route(
            "/{id}",
            put(transactions::update).delete(transactions::delete),
        )
}
