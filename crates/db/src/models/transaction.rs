//! Budget transaction models and DTOs.
//!
//! The JSON field `type` is stored in the `tx_type` column; serde renames
//! it at the API boundary.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasktutor_core::error::CoreError;
use tasktutor_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub category: String,
    pub amount: f64,
    pub date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a transaction.
///
/// Every field is optional at the deserialization layer so a missing field
/// reaches [`CreateTransaction::validate`] and reports as a 400 with a
/// message, instead of being rejected by the body extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransaction {
    #[serde(rename = "type")]
    pub tx_type: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<Timestamp>,
}

impl CreateTransaction {
    /// Check that `type` and `category` are present and non-empty, and that
    /// `amount` is present and non-null.
    ///
    /// `date` is not required; the repository fills in the database's
    /// current timestamp when it is absent.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [("type", &self.tx_type), ("category", &self.category)] {
            if !value.as_deref().is_some_and(|v| !v.is_empty()) {
                return Err(CoreError::Validation(format!(
                    "Missing required field: {name}"
                )));
            }
        }
        if self.amount.is_none() {
            return Err(CoreError::Validation(
                "Missing required field: amount".into(),
            ));
        }
        Ok(())
    }
}

/// DTO for a partial transaction update.
///
/// Only present fields overwrite stored values. No field-level validation
/// is applied on update; the merge is deliberately permissive.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTransaction {
    #[serde(rename = "type")]
    pub tx_type: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CreateTransaction {
        CreateTransaction {
            tx_type: Some("expense".into()),
            category: Some("food".into()),
            amount: Some(20.0),
            date: None,
        }
    }

    #[test]
    fn validate_accepts_payload_without_date() {
        assert!(full_payload().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_amount() {
        let mut input = full_payload();
        input.amount = None;
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn validate_rejects_empty_type() {
        let mut input = full_payload();
        input.tx_type = Some(String::new());
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn create_dto_reads_json_type_field() {
        let input: CreateTransaction =
            serde_json::from_str(r#"{"type":"income","category":"salary","amount":100}"#).unwrap();
        assert_eq!(input.tx_type.as_deref(), Some("income"));
        assert_eq!(input.amount, Some(100.0));
        assert!(input.validate().is_ok());
    }
}
