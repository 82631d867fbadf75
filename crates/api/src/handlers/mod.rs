//! HTTP request handlers, one module per resource.

pub mod classes;
pub mod health;
pub mod transactions;

use tasktutor_core::types::DbId;

use crate::error::AppError;

/// Parse a path identifier for update/delete routes, where a malformed id
/// is a client error rather than a miss.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<DbId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {entity} id: {raw}")))
}
