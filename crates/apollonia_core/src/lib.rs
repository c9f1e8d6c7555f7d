//! Core domain logic for the Apollonia staff directory.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    Department, DepartmentId, DepartmentInput, Employee, EmployeeId, EmployeeInput, EmployeeView,
    ValidationError,
};
pub use repo::directory_repo::{
    DirectoryRepository, MemoryDirectoryRepository, RepoError, RepoResult,
};
pub use seed::seed_directory;
pub use service::directory_service::{populate_employees, DirectoryService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
