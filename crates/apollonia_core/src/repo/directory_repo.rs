//! Directory repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the department and employee collections.
//! - Enforce referential integrity at write time and on department delete
//!   (cascade removal of dependent employees).
//!
//! # Invariants
//! - Ids are monotonically assigned per entity type and never reused within
//!   a process lifetime.
//! - Every stored `Employee.department_id` references a stored department.
//! - A failed operation leaves both collections unchanged.
//! - Collections keep insertion order; updates preserve position and id.

use crate::model::{
    Department, DepartmentId, DepartmentInput, Employee, EmployeeId, EmployeeInput,
    ValidationError,
};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic repository error for directory operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Request shape failed required-field or referential checks.
    Validation(ValidationError),
    /// Target department id is absent from the store.
    DepartmentNotFound(DepartmentId),
    /// Target employee id is absent from the store.
    EmployeeNotFound(EmployeeId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DepartmentNotFound(id) => write!(f, "department not found: {id}"),
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DepartmentNotFound(_) | Self::EmployeeNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for directory CRUD operations.
///
/// Both collections live behind one contract because department deletion
/// must atomically remove dependent employees.
pub trait DirectoryRepository {
    /// Lists departments in insertion order.
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
    /// Gets one department by stable id.
    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Validates input, assigns the next department id, and appends.
    fn create_department(&mut self, input: &DepartmentInput) -> RepoResult<Department>;
    /// Replaces the mutable fields of an existing department in place.
    fn update_department(
        &mut self,
        id: DepartmentId,
        input: &DepartmentInput,
    ) -> RepoResult<Department>;
    /// Removes a department and every employee referencing it.
    fn delete_department(&mut self, id: DepartmentId) -> RepoResult<()>;
    /// Lists employees in insertion order, un-joined.
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    /// Validates input and its department reference, assigns the next
    /// employee id, and appends.
    fn create_employee(&mut self, input: &EmployeeInput) -> RepoResult<Employee>;
    /// Replaces the mutable fields of an existing employee in place.
    fn update_employee(&mut self, id: EmployeeId, input: &EmployeeInput)
        -> RepoResult<Employee>;
    /// Removes one employee by stable id.
    fn delete_employee(&mut self, id: EmployeeId) -> RepoResult<()>;
}

/// In-memory directory store.
///
/// An owned value with no ambient state, so tests and embedders can run any
/// number of independent instances. Mutations take `&mut self`, which gives
/// every call the atomic request-at-a-time semantics the contract requires.
#[derive(Debug)]
pub struct MemoryDirectoryRepository {
    departments: Vec<Department>,
    employees: Vec<Employee>,
    next_department_id: DepartmentId,
    next_employee_id: EmployeeId,
}

impl Default for MemoryDirectoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDirectoryRepository {
    /// Creates an empty store with both id counters at their start value.
    pub fn new() -> Self {
        Self {
            departments: Vec::new(),
            employees: Vec::new(),
            next_department_id: 1,
            next_employee_id: 1,
        }
    }

    fn take_next_department_id(&mut self) -> DepartmentId {
        let id = self.next_department_id;
        self.next_department_id += 1;
        id
    }

    fn take_next_employee_id(&mut self) -> EmployeeId {
        let id = self.next_employee_id;
        self.next_employee_id += 1;
        id
    }

    fn department_exists(&self, id: DepartmentId) -> bool {
        self.departments.iter().any(|dept| dept.id == id)
    }

    /// Confirms the employee's department reference before any write.
    fn checked_department_id(&self, input: &EmployeeInput) -> RepoResult<DepartmentId> {
        let department_id = input.validate()?;
        if !self.department_exists(department_id) {
            return Err(ValidationError::UnknownDepartment(department_id).into());
        }
        Ok(department_id)
    }
}

impl DirectoryRepository for MemoryDirectoryRepository {
    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        Ok(self.departments.clone())
    }

    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        Ok(self.departments.iter().find(|dept| dept.id == id).cloned())
    }

    fn create_department(&mut self, input: &DepartmentInput) -> RepoResult<Department> {
        input.validate()?;

        let department = Department {
            id: self.take_next_department_id(),
            name: input.name.trim().to_string(),
            location: input.location.trim().to_string(),
        };
        self.departments.push(department.clone());

        debug!(
            "event=department_create module=repo status=ok id={}",
            department.id
        );
        Ok(department)
    }

    fn update_department(
        &mut self,
        id: DepartmentId,
        input: &DepartmentInput,
    ) -> RepoResult<Department> {
        // Not-found is reported before field validation.
        let position = self
            .departments
            .iter()
            .position(|dept| dept.id == id)
            .ok_or(RepoError::DepartmentNotFound(id))?;
        input.validate()?;

        let department = &mut self.departments[position];
        department.name = input.name.trim().to_string();
        department.location = input.location.trim().to_string();

        debug!("event=department_update module=repo status=ok id={id}");
        Ok(department.clone())
    }

    fn delete_department(&mut self, id: DepartmentId) -> RepoResult<()> {
        if !self.department_exists(id) {
            return Err(RepoError::DepartmentNotFound(id));
        }

        self.departments.retain(|dept| dept.id != id);
        let before = self.employees.len();
        self.employees.retain(|emp| emp.department_id != id);
        let cascade_removed = before - self.employees.len();

        info!(
            "event=department_delete module=repo status=ok id={id} cascade_removed={cascade_removed}"
        );
        Ok(())
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn create_employee(&mut self, input: &EmployeeInput) -> RepoResult<Employee> {
        let department_id = self.checked_department_id(input)?;

        let employee = Employee {
            id: self.take_next_employee_id(),
            name: input.name.trim().to_string(),
            position: input.position.trim().to_string(),
            email: input.email.trim().to_string(),
            department_id,
        };
        self.employees.push(employee.clone());

        debug!(
            "event=employee_create module=repo status=ok id={} department_id={}",
            employee.id, department_id
        );
        Ok(employee)
    }

    fn update_employee(
        &mut self,
        id: EmployeeId,
        input: &EmployeeInput,
    ) -> RepoResult<Employee> {
        // Not-found is reported before field validation.
        let position = self
            .employees
            .iter()
            .position(|emp| emp.id == id)
            .ok_or(RepoError::EmployeeNotFound(id))?;
        let department_id = self.checked_department_id(input)?;

        let employee = &mut self.employees[position];
        employee.name = input.name.trim().to_string();
        employee.position = input.position.trim().to_string();
        employee.email = input.email.trim().to_string();
        employee.department_id = department_id;

        debug!("event=employee_update module=repo status=ok id={id}");
        Ok(employee.clone())
    }

    fn delete_employee(&mut self, id: EmployeeId) -> RepoResult<()> {
        let before = self.employees.len();
        self.employees.retain(|emp| emp.id != id);
        if self.employees.len() == before {
            return Err(RepoError::EmployeeNotFound(id));
        }

        debug!("event=employee_delete module=repo status=ok id={id}");
        Ok(())
    }
}
