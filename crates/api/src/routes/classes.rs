//! Route definitions for the class schedule registry.

use axum::routing::get;
use axum::Router;

use crate::handlers::classes;
use crate::state::AppState;

/// Class registry routes mounted at `/classes`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(classes::list).post(classes::create))
        .route(
            "/{id}",
            get(classes::get_by_id)
                .put(classes::update)
                .delete(classes::delete),
        )
}
