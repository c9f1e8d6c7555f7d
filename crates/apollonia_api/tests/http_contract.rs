use apollonia_api::{ApiResponse, DirectoryApi};
use apollonia_core::{seed_directory, MemoryDirectoryRepository};
use serde_json::Value;

fn empty_api() -> DirectoryApi<MemoryDirectoryRepository> {
    DirectoryApi::new(MemoryDirectoryRepository::new())
}

fn seeded_api() -> DirectoryApi<MemoryDirectoryRepository> {
    let mut repo = MemoryDirectoryRepository::new();
    seed_directory(&mut repo).unwrap();
    DirectoryApi::new(repo)
}

fn body_json(response: &ApiResponse) -> Value {
    serde_json::from_str(response.body.as_deref().expect("response should carry a body")).unwrap()
}

#[test]
fn get_departments_returns_200_with_array() {
    let mut api = seeded_api();
    let response = api.handle("GET", "/api/departments", None);

    assert_eq!(response.status, 200);
    let json = body_json(&response);
    let departments = json.as_array().unwrap();
    assert_eq!(departments.len(), 4);
    assert_eq!(departments[0]["name"], "General Dentistry");
    assert_eq!(departments[0]["location"], "Building A, 1st Floor");
}

#[test]
fn post_department_returns_201_with_created_record() {
    let mut api = empty_api();
    let response = api.handle(
        "POST",
        "/api/departments",
        Some(r#"{"name":"Radiology","location":"B2"}"#),
    );

    assert_eq!(response.status, 201);
    let json = body_json(&response);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Radiology");
    assert_eq!(json["location"], "B2");
}

#[test]
fn post_department_with_missing_field_returns_400_envelope() {
    let mut api = empty_api();
    let response = api.handle("POST", "/api/departments", Some(r#"{"name":"Radiology"}"#));

    assert_eq!(response.status, 400);
    let json = body_json(&response);
    assert!(json["message"].as_str().unwrap().contains("location"));
}

#[test]
fn post_department_with_malformed_body_returns_400() {
    let mut api = empty_api();
    let response = api.handle("POST", "/api/departments", Some("not json"));
    assert_eq!(response.status, 400);
    assert_eq!(body_json(&response)["message"], "invalid request body");

    let missing = api.handle("POST", "/api/departments", None);
    assert_eq!(missing.status, 400);
}

#[test]
fn put_department_returns_200_with_updated_record() {
    let mut api = empty_api();
    api.handle(
        "POST",
        "/api/departments",
        Some(r#"{"name":"Radiology","location":"B2"}"#),
    );

    let response = api.handle(
        "PUT",
        "/api/departments/1",
        Some(r#"{"name":"Imaging","location":"B3"}"#),
    );

    assert_eq!(response.status, 200);
    let json = body_json(&response);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Imaging");
    assert_eq!(json["location"], "B3");
}

#[test]
fn put_unknown_department_returns_404() {
    let mut api = empty_api();
    let response = api.handle(
        "PUT",
        "/api/departments/42",
        Some(r#"{"name":"Ghost","location":"Nowhere"}"#),
    );

    assert_eq!(response.status, 404);
    assert!(body_json(&response)["message"]
        .as_str()
        .unwrap()
        .contains("department not found"));
}

#[test]
fn delete_department_returns_204_then_404() {
    let mut api = empty_api();
    api.handle(
        "POST",
        "/api/departments",
        Some(r#"{"name":"Radiology","location":"B2"}"#),
    );

    let first = api.handle("DELETE", "/api/departments/1", None);
    assert_eq!(first.status, 204);
    assert!(first.body.is_none());

    let second = api.handle("DELETE", "/api/departments/1", None);
    assert_eq!(second.status, 404);
}

#[test]
fn get_employees_returns_views_with_department_names() {
    let mut api = seeded_api();
    let response = api.handle("GET", "/api/employees", None);

    assert_eq!(response.status, 200);
    let json = body_json(&response);
    let employees = json.as_array().unwrap();
    assert_eq!(employees.len(), 5);
    assert_eq!(employees[0]["name"], "Dr. Evelyn Reed");
    assert_eq!(employees[0]["departmentName"], "General Dentistry");
    assert_eq!(employees[1]["departmentName"], "Orthodontics");
}

#[test]
fn post_employee_returns_201_with_populated_view() {
    let mut api = empty_api();
    api.handle(
        "POST",
        "/api/departments",
        Some(r#"{"name":"Radiology","location":"B2"}"#),
    );

    let response = api.handle(
        "POST",
        "/api/employees",
        Some(r#"{"name":"A","position":"Tech","email":"a@x.com","departmentId":1}"#),
    );

    assert_eq!(response.status, 201);
    let json = body_json(&response);
    assert_eq!(json["id"], 1);
    assert_eq!(json["departmentId"], 1);
    assert_eq!(json["departmentName"], "Radiology");
}

#[test]
fn post_employee_with_unknown_department_returns_400() {
    let mut api = empty_api();
    let response = api.handle(
        "POST",
        "/api/employees",
        Some(r#"{"name":"A","position":"Tech","email":"a@x.com","departmentId":9}"#),
    );

    assert_eq!(response.status, 400);
    assert!(body_json(&response)["message"]
        .as_str()
        .unwrap()
        .contains("unknown department"));
}

#[test]
fn post_employee_with_missing_field_returns_400() {
    let mut api = seeded_api();
    let response = api.handle(
        "POST",
        "/api/employees",
        Some(r#"{"name":"A","position":"","email":"a@x.com","departmentId":1}"#),
    );

    assert_eq!(response.status, 400);
    assert!(body_json(&response)["message"]
        .as_str()
        .unwrap()
        .contains("position"));
}

#[test]
fn put_employee_returns_200_with_rejoined_view() {
    let mut api = seeded_api();
    let response = api.handle(
        "PUT",
        "/api/employees/5",
        Some(r#"{"name":"Jenna Stiles","position":"Senior Hygienist","email":"j.stiles@apollonia.com","departmentId":2}"#),
    );

    assert_eq!(response.status, 200);
    let json = body_json(&response);
    assert_eq!(json["id"], 5);
    assert_eq!(json["position"], "Senior Hygienist");
    assert_eq!(json["departmentName"], "Orthodontics");
}

#[test]
fn put_unknown_employee_returns_404() {
    let mut api = seeded_api();
    let response = api.handle(
        "PUT",
        "/api/employees/50",
        Some(r#"{"name":"X","position":"Y","email":"x@y.com","departmentId":1}"#),
    );
    assert_eq!(response.status, 404);
}

#[test]
fn delete_employee_returns_204_then_404() {
    let mut api = seeded_api();

    let first = api.handle("DELETE", "/api/employees/3", None);
    assert_eq!(first.status, 204);
    assert!(first.body.is_none());

    let second = api.handle("DELETE", "/api/employees/3", None);
    assert_eq!(second.status, 404);
}

#[test]
fn department_cascade_scenario_matches_reference_behavior() {
    let mut api = empty_api();

    let created = api.handle(
        "POST",
        "/api/departments",
        Some(r#"{"name":"Radiology","location":"B2"}"#),
    );
    assert_eq!(created.status, 201);
    let department_id = body_json(&created)["id"].as_u64().unwrap();

    let hired = api.handle(
        "POST",
        "/api/employees",
        Some(&format!(
            r#"{{"name":"A","position":"Tech","email":"a@x.com","departmentId":{department_id}}}"#
        )),
    );
    assert_eq!(hired.status, 201);
    let hired_json = body_json(&hired);
    assert_eq!(hired_json["departmentName"], "Radiology");
    let employee_id = hired_json["id"].as_u64().unwrap();

    let deleted = api.handle("DELETE", &format!("/api/departments/{department_id}"), None);
    assert_eq!(deleted.status, 204);

    let listing = api.handle("GET", "/api/employees", None);
    let employees = body_json(&listing);
    assert!(employees
        .as_array()
        .unwrap()
        .iter()
        .all(|emp| emp["id"].as_u64() != Some(employee_id)));
}

#[test]
fn unmatched_paths_and_verbs_return_404() {
    let mut api = seeded_api();

    assert_eq!(api.handle("GET", "/api/clinics", None).status, 404);
    assert_eq!(api.handle("GET", "/api/departments/1", None).status, 404);
    assert_eq!(api.handle("POST", "/api/departments/1", None).status, 404);
    assert_eq!(api.handle("PUT", "/api/departments", None).status, 404);
    assert_eq!(api.handle("DELETE", "/api/employees", None).status, 404);
    assert_eq!(api.handle("DELETE", "/api/employees/abc", None).status, 404);
    assert_eq!(api.handle("PATCH", "/api/employees/1", None).status, 404);
}

#[test]
fn method_matching_is_case_insensitive() {
    let mut api = seeded_api();
    let response = api.handle("get", "/api/departments", None);
    assert_eq!(response.status, 200);
}
