//! Domain model for the staff directory.
//!
//! # Responsibility
//! - Define the canonical department/employee records and their input shapes.
//! - Own required-field validation for every write path.
//!
//! # Invariants
//! - Every record is identified by a stable per-entity-type integer id.
//! - Input shapes reject missing or whitespace-only required fields before
//!   any collection is touched.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department;
pub mod employee;

pub use department::{Department, DepartmentId, DepartmentInput};
pub use employee::{Employee, EmployeeId, EmployeeInput, EmployeeView};

/// Typed rejection for request shapes that fail required-field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or empty after trimming.
    MissingField(&'static str),
    /// The supplied department reference resolves to no stored department.
    UnknownDepartment(DepartmentId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "required field is missing or empty: {field}")
            }
            Self::UnknownDepartment(id) => write!(f, "unknown department id: {id}"),
        }
    }
}

impl Error for ValidationError {}
