//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `apollonia_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use apollonia_core::{
    core_version, ping, seed_directory, DirectoryRepository, MemoryDirectoryRepository,
};

fn main() {
    println!("apollonia_core ping={}", ping());
    println!("apollonia_core version={}", core_version());

    let mut repo = MemoryDirectoryRepository::new();
    match seed_directory(&mut repo) {
        Ok(()) => {
            let departments = repo.list_departments().map(|list| list.len()).unwrap_or(0);
            let employees = repo.list_employees().map(|list| list.len()).unwrap_or(0);
            println!("apollonia_core seed departments={departments} employees={employees}");
        }
        Err(err) => eprintln!("apollonia_core seed failed: {err}"),
    }
}
