//! Class schedule entry models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasktutor_core::error::CoreError;
use tasktutor_core::types::{DbId, Timestamp};

/// Color applied to a class entry when the client does not pick one.
pub const DEFAULT_COLOR: &str = "bg-blue-200";

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassEntry {
    pub id: DbId,
    pub subject: String,
    pub day: String,
    pub time: String,
    pub instructor: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a class entry.
///
/// Every field is optional at the deserialization layer so a missing field
/// reaches [`CreateClassEntry::validate`] and reports as a 400 with a
/// message, instead of being rejected by the body extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassEntry {
    pub subject: Option<String>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub instructor: Option<String>,
    pub color: Option<String>,
}

impl CreateClassEntry {
    /// Check that every required field is present and non-empty.
    ///
    /// `color` is not required; the repository applies [`DEFAULT_COLOR`]
    /// when it is absent.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [
            ("subject", &self.subject),
            ("day", &self.day),
            ("time", &self.time),
            ("instructor", &self.instructor),
        ] {
            if !value.as_deref().is_some_and(|v| !v.is_empty()) {
                return Err(CoreError::Validation(format!(
                    "Missing required field: {name}"
                )));
            }
        }
        Ok(())
    }
}

/// DTO for a partial class entry update.
///
/// Only present fields overwrite stored values. No field-level validation
/// is applied on update; the merge is deliberately permissive.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClassEntry {
    pub subject: Option<String>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub instructor: Option<String>,
    pub color: Option<String>,
}
