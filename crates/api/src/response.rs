//! Shared response types for API handlers.

use serde::Serialize;

/// A `{ "message": ... }` confirmation body.
///
/// Used by the delete endpoints; error responses in [`crate::error`]
/// carry the same shape, so every non-entity body looks alike.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
