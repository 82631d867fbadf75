//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, with its validation rules
//! - A `Deserialize` update DTO (all `Option` fields) for partial merges

pub mod class_entry;
pub mod transaction;
