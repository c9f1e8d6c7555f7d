//! Directory use-case service and view composition.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for boundary callers.
//! - Compose the populated employee read model (employee + department name).
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - View composition is a pure function of both collections at call time;
//!   nothing is cached, so reads reflect cascade deletes immediately.

use crate::model::{
    Department, DepartmentId, DepartmentInput, Employee, EmployeeId, EmployeeInput, EmployeeView,
};
use crate::repo::directory_repo::{DirectoryRepository, RepoResult};

/// Joins each employee to its department's display name.
///
/// Unresolvable references render as [`EmployeeView::UNRESOLVED_DEPARTMENT`];
/// a store that enforces referential integrity never produces them, but the
/// composer stays total either way.
pub fn populate_employees(employees: Vec<Employee>, departments: &[Department]) -> Vec<EmployeeView> {
    employees
        .into_iter()
        .map(|employee| {
            let department = departments
                .iter()
                .find(|dept| dept.id == employee.department_id);
            EmployeeView::join(employee, department)
        })
        .collect()
}

/// Use-case facade over a directory repository implementation.
pub struct DirectoryService<R: DirectoryRepository> {
    repo: R,
}

impl<R: DirectoryRepository> DirectoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists departments in insertion order.
    pub fn list_departments(&self) -> RepoResult<Vec<Department>> {
        self.repo.list_departments()
    }

    /// Creates a department from validated input.
    pub fn create_department(&mut self, input: &DepartmentInput) -> RepoResult<Department> {
        self.repo.create_department(input)
    }

    /// Replaces a department's mutable fields, preserving its id.
    pub fn update_department(
        &mut self,
        id: DepartmentId,
        input: &DepartmentInput,
    ) -> RepoResult<Department> {
        self.repo.update_department(id, input)
    }

    /// Deletes a department and cascades to its employees.
    pub fn delete_department(&mut self, id: DepartmentId) -> RepoResult<()> {
        self.repo.delete_department(id)
    }

    /// Lists employees joined with their department display names.
    pub fn list_employees(&self) -> RepoResult<Vec<EmployeeView>> {
        let departments = self.repo.list_departments()?;
        let employees = self.repo.list_employees()?;
        Ok(populate_employees(employees, &departments))
    }

    /// Creates an employee and returns it joined with its department name.
    pub fn create_employee(&mut self, input: &EmployeeInput) -> RepoResult<EmployeeView> {
        let employee = self.repo.create_employee(input)?;
        self.joined(employee)
    }

    /// Replaces an employee's mutable fields and returns the joined view.
    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        input: &EmployeeInput,
    ) -> RepoResult<EmployeeView> {
        let employee = self.repo.update_employee(id, input)?;
        self.joined(employee)
    }

    /// Deletes one employee by stable id.
    pub fn delete_employee(&mut self, id: EmployeeId) -> RepoResult<()> {
        self.repo.delete_employee(id)
    }

    fn joined(&self, employee: Employee) -> RepoResult<EmployeeView> {
        let department = self.repo.get_department(employee.department_id)?;
        Ok(EmployeeView::join(employee, department.as_ref()))
    }
}
