#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The identifier matches no stored row. `id` is kept as raw text so
    /// unparseable path identifiers can report the same way as real misses.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for an entity and the (possibly unparseable) raw id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
