//! Repository layer abstractions and the in-memory directory store.
//!
//! # Responsibility
//! - Define the data access contract for both directory collections.
//! - Isolate collection mechanics from service/business orchestration.
//!
//! # Invariants
//! - Repository writes enforce input validation before any mutation.
//! - Repository APIs return semantic errors (`DepartmentNotFound`,
//!   `EmployeeNotFound`) rather than sentinel values.
//! - The store exclusively owns both collections; no other component
//!   mutates them directly.

pub mod directory_repo;
