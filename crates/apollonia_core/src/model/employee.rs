//! Employee domain model and populated read view.
//!
//! # Responsibility
//! - Define the canonical employee record, its write-request shape, and the
//!   joined read model carrying the department display name.
//!
//! # Invariants
//! - `id` is assigned by the store, is stable, and is never reused.
//! - `department_id` references a stored department at every write.
//! - `email` is intended-unique in the future document schema; the in-memory
//!   store does not enforce it.

use super::department::{Department, DepartmentId};
use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Stable identifier for an employee.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = u64;

/// Canonical employee record held by the directory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned stable id.
    pub id: EmployeeId,
    /// Full display name, non-empty.
    pub name: String,
    /// Job title, non-empty.
    pub position: String,
    /// Contact address, non-empty.
    pub email: String,
    /// Owning department. Serialized as `departmentId` to match the wire
    /// contract.
    #[serde(rename = "departmentId")]
    pub department_id: DepartmentId,
}

/// Write-request shape for employee create/update.
///
/// String fields default to empty on deserialization and `department_id`
/// defaults to `None`, so absent properties surface as validation errors
/// rather than decode errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmployeeInput {
    /// Requested display name.
    #[serde(default)]
    pub name: String,
    /// Requested job title.
    #[serde(default)]
    pub position: String,
    /// Requested contact address.
    #[serde(default)]
    pub email: String,
    /// Requested owning department.
    #[serde(default, rename = "departmentId")]
    pub department_id: Option<DepartmentId>,
}

impl EmployeeInput {
    /// Builds an input shape from owned field values.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        email: impl Into<String>,
        department_id: DepartmentId,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            email: email.into(),
            department_id: Some(department_id),
        }
    }

    /// Checks that all four required fields are present and non-empty.
    ///
    /// Whitespace-only values count as missing. Department existence is a
    /// store-level check and is not performed here.
    pub fn validate(&self) -> Result<DepartmentId, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.position.trim().is_empty() {
            return Err(ValidationError::MissingField("position"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        self.department_id
            .ok_or(ValidationError::MissingField("departmentId"))
    }
}

/// Populated read model: one employee joined to its department display name.
///
/// Recomputed from the live collections on every read, never cached, so it
/// reflects cascade deletes immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeView {
    /// Stable employee id.
    pub id: EmployeeId,
    /// Full display name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Contact address.
    pub email: String,
    /// Owning department id.
    #[serde(rename = "departmentId")]
    pub department_id: DepartmentId,
    /// Display name of the owning department, or the unresolved sentinel.
    #[serde(rename = "departmentName")]
    pub department_name: String,
}

impl EmployeeView {
    /// Sentinel shown when a department reference cannot be resolved.
    pub const UNRESOLVED_DEPARTMENT: &'static str = "N/A";

    /// Joins one employee record to an optionally resolved department.
    pub fn join(employee: Employee, department: Option<&Department>) -> Self {
        let department_name = department
            .map(|dept| dept.name.clone())
            .unwrap_or_else(|| Self::UNRESOLVED_DEPARTMENT.to_string());
        Self {
            id: employee.id,
            name: employee.name,
            position: employee.position,
            email: employee.email,
            department_id: employee.department_id,
            department_name,
        }
    }
}
