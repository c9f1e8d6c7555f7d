//! Request dispatch for the directory HTTP contract.
//!
//! # Responsibility
//! - Match the two resource paths, decode request bodies, and call exactly
//!   one store operation per request.
//! - Keep error payloads stable: every failure body is `{"message": ...}`.
//!
//! # Invariants
//! - `handle` never panics; malformed input becomes a 400 or 404 response.
//! - Unmatched paths, non-numeric ids, and unsupported verbs fall through
//!   to 404, like the reference server's default route.

use apollonia_core::{
    DepartmentInput, DirectoryRepository, DirectoryService, EmployeeInput, RepoError,
};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;

static DEPARTMENTS_ROUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/api/departments(?:/(\d+))?$").expect("valid departments route"));
static EMPLOYEES_ROUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/api/employees(?:/(\d+))?$").expect("valid employees route"));

/// Transport-agnostic response: a status code plus an optional JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body; `None` only for 204 responses.
    pub body: Option<String>,
}

impl ApiResponse {
    fn json(status: u16, value: &impl Serialize) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                body: Some(body),
            },
            Err(_) => Self::error(500, "response serialization failed"),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: Some(serde_json::json!({ "message": message }).to_string()),
        }
    }

    fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    fn not_found() -> Self {
        Self::error(404, "not found")
    }
}

/// Identifier segment of a matched route.
enum RouteId {
    /// Collection path with no id segment.
    None,
    /// Numeric id segment.
    Some(u64),
    /// Id segment present but outside the addressable range.
    Invalid,
}

fn route_id(caps: &regex::Captures<'_>) -> RouteId {
    match caps.get(1) {
        None => RouteId::None,
        Some(segment) => match segment.as_str().parse::<u64>() {
            Ok(id) => RouteId::Some(id),
            Err(_) => RouteId::Invalid,
        },
    }
}

fn decode_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T, ApiResponse> {
    serde_json::from_str(body.unwrap_or_default())
        .map_err(|_| ApiResponse::error(400, "invalid request body"))
}

fn repo_error(err: &RepoError) -> ApiResponse {
    match err {
        RepoError::Validation(_) => ApiResponse::error(400, &err.to_string()),
        RepoError::DepartmentNotFound(_) | RepoError::EmployeeNotFound(_) => {
            ApiResponse::error(404, &err.to_string())
        }
    }
}

/// Boundary facade over a directory store.
///
/// A host mounts this behind whatever transport it runs; each call routes to
/// exactly one store operation and yields a complete response.
pub struct DirectoryApi<R: DirectoryRepository> {
    service: DirectoryService<R>,
}

impl<R: DirectoryRepository> DirectoryApi<R> {
    /// Wraps a repository in the boundary facade.
    pub fn new(repo: R) -> Self {
        Self {
            service: DirectoryService::new(repo),
        }
    }

    /// Dispatches one request against the directory contract.
    ///
    /// `method` is matched case-insensitively; `body` is only consulted for
    /// POST and PUT.
    pub fn handle(&mut self, method: &str, path: &str, body: Option<&str>) -> ApiResponse {
        let method = method.to_ascii_uppercase();
        let response = self.dispatch(&method, path, body);
        debug!(
            "event=api_dispatch module=api status={} method={method} path={path}",
            response.status
        );
        response
    }

    fn dispatch(&mut self, method: &str, path: &str, body: Option<&str>) -> ApiResponse {
        if let Some(caps) = DEPARTMENTS_ROUTE.captures(path) {
            return self.dispatch_departments(method, route_id(&caps), body);
        }
        if let Some(caps) = EMPLOYEES_ROUTE.captures(path) {
            return self.dispatch_employees(method, route_id(&caps), body);
        }
        ApiResponse::not_found()
    }

    fn dispatch_departments(
        &mut self,
        method: &str,
        id: RouteId,
        body: Option<&str>,
    ) -> ApiResponse {
        match (method, id) {
            ("GET", RouteId::None) => match self.service.list_departments() {
                Ok(departments) => ApiResponse::json(200, &departments),
                Err(err) => repo_error(&err),
            },
            ("POST", RouteId::None) => {
                let input: DepartmentInput = match decode_body(body) {
                    Ok(input) => input,
                    Err(response) => return response,
                };
                match self.service.create_department(&input) {
                    Ok(department) => ApiResponse::json(201, &department),
                    Err(err) => repo_error(&err),
                }
            }
            ("PUT", RouteId::Some(id)) => {
                let input: DepartmentInput = match decode_body(body) {
                    Ok(input) => input,
                    Err(response) => return response,
                };
                match self.service.update_department(id, &input) {
                    Ok(department) => ApiResponse::json(200, &department),
                    Err(err) => repo_error(&err),
                }
            }
            ("DELETE", RouteId::Some(id)) => match self.service.delete_department(id) {
                Ok(()) => ApiResponse::no_content(),
                Err(err) => repo_error(&err),
            },
            _ => ApiResponse::not_found(),
        }
    }

    fn dispatch_employees(&mut self, method: &str, id: RouteId, body: Option<&str>) -> ApiResponse {
        match (method, id) {
            ("GET", RouteId::None) => match self.service.list_employees() {
                Ok(views) => ApiResponse::json(200, &views),
                Err(err) => repo_error(&err),
            },
            ("POST", RouteId::None) => {
                let input: EmployeeInput = match decode_body(body) {
                    Ok(input) => input,
                    Err(response) => return response,
                };
                match self.service.create_employee(&input) {
                    Ok(view) => ApiResponse::json(201, &view),
                    Err(err) => repo_error(&err),
                }
            }
            ("PUT", RouteId::Some(id)) => {
                let input: EmployeeInput = match decode_body(body) {
                    Ok(input) => input,
                    Err(response) => return response,
                };
                match self.service.update_employee(id, &input) {
                    Ok(view) => ApiResponse::json(200, &view),
                    Err(err) => repo_error(&err),
                }
            }
            ("DELETE", RouteId::Some(id)) => match self.service.delete_employee(id) {
                Ok(()) => ApiResponse::no_content(),
                Err(err) => repo_error(&err),
            },
            _ => ApiResponse::not_found(),
        }
    }
}
