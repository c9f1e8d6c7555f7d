//! Department domain model.
//!
//! # Responsibility
//! - Define the canonical department record and its write-request shape.
//!
//! # Invariants
//! - `id` is assigned by the store, is stable, and is never reused.
//! - `name` and `location` are non-empty at every write.

use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Stable identifier for a department.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DepartmentId = u64;

/// Canonical department record held by the directory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Store-assigned stable id.
    pub id: DepartmentId,
    /// Display name, non-empty.
    pub name: String,
    /// Physical location label, non-empty.
    pub location: String,
}

/// Write-request shape for department create/update.
///
/// Fields default to empty strings on deserialization so an absent property
/// surfaces as a validation error rather than a decode error, matching the
/// boundary contract (missing field -> 400).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DepartmentInput {
    /// Requested display name.
    #[serde(default)]
    pub name: String,
    /// Requested location label.
    #[serde(default)]
    pub location: String,
}

impl DepartmentInput {
    /// Builds an input shape from owned field values.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Checks that both required fields are present and non-empty.
    ///
    /// Whitespace-only values count as missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingField("location"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DepartmentInput;
    use crate::model::ValidationError;

    #[test]
    fn validate_accepts_populated_fields() {
        let input = DepartmentInput::new("Orthodontics", "Building A, 2nd Floor");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let input = DepartmentInput::new("", "Main Office");
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::MissingField("name")
        );
    }

    #[test]
    fn validate_treats_whitespace_only_location_as_missing() {
        let input = DepartmentInput::new("Administration", "   ");
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::MissingField("location")
        );
    }

    #[test]
    fn deserialize_defaults_absent_fields_to_empty() {
        let input: DepartmentInput = serde_json::from_str(r#"{"name":"Radiology"}"#).unwrap();
        assert_eq!(input.name, "Radiology");
        assert!(input.location.is_empty());
        assert!(input.validate().is_err());
    }
}
