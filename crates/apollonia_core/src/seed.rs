//! Reference dataset loader.
//!
//! # Responsibility
//! - Populate an empty store with the clinic's initial departments and
//!   employees for demos and smoke checks.
//!
//! # Invariants
//! - Seeding goes through the normal create operations, so id counters and
//!   referential integrity hold afterwards.

use crate::model::{DepartmentId, DepartmentInput, EmployeeInput};
use crate::repo::directory_repo::{DirectoryRepository, RepoResult};
use log::info;

const DEPARTMENTS: [(&str, &str); 4] = [
    ("General Dentistry", "Building A, 1st Floor"),
    ("Orthodontics", "Building A, 2nd Floor"),
    ("Oral Surgery", "Building B, 1st Floor"),
    ("Administration", "Main Office"),
];

/// Employee rows as (name, position, email, index into [`DEPARTMENTS`]).
const EMPLOYEES: [(&str, &str, &str, usize); 5] = [
    ("Dr. Evelyn Reed", "General Dentist", "e.reed@apollonia.com", 0),
    ("Dr. Samuel Chen", "Orthodontist", "s.chen@apollonia.com", 1),
    ("Dr. Isabella Vance", "Oral Surgeon", "i.vance@apollonia.com", 2),
    ("Marcus Holloway", "Office Manager", "m.holloway@apollonia.com", 3),
    ("Jenna Stiles", "Dental Hygienist", "j.stiles@apollonia.com", 0),
];

/// Loads the reference dataset into the given repository.
///
/// Intended for an empty store; calling it again appends another copy with
/// fresh ids, since the store never reuses identifiers.
pub fn seed_directory<R: DirectoryRepository>(repo: &mut R) -> RepoResult<()> {
    let mut department_ids: Vec<DepartmentId> = Vec::with_capacity(DEPARTMENTS.len());
    for (name, location) in DEPARTMENTS {
        let department = repo.create_department(&DepartmentInput::new(name, location))?;
        department_ids.push(department.id);
    }

    for (name, position, email, department_index) in EMPLOYEES {
        let input = EmployeeInput::new(name, position, email, department_ids[department_index]);
        repo.create_employee(&input)?;
    }

    info!(
        "event=seed module=seed status=ok departments={} employees={}",
        DEPARTMENTS.len(),
        EMPLOYEES.len()
    );
    Ok(())
}
