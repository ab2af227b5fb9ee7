//! Employee Endpoints
//!
//! CRUD bindings for `/employees`.

use reqwest::header::CONTENT_TYPE;

use crate::models::{Employee, EmployeeDraft};
use super::{client, decode_ack, decode_envelope, encode_component, send, FetchError};

fn employees_url(api: &str) -> String {
    format!("{}/employees", api)
}

fn employee_url(api: &str, id: &str) -> String {
    format!("{}/employees/{}", api, encode_component(id))
}

/// Full employee list. Failures are logged and yield an empty list.
pub async fn list_employees(api: &str) -> Vec<Employee> {
    match try_list_employees(api).await {
        Ok(employees) => employees,
        Err(e) => {
            log::error!("Error fetching employees: {}", e);
            Vec::new()
        }
    }
}

async fn try_list_employees(api: &str) -> Result<Vec<Employee>, FetchError> {
    let url = employees_url(api);
    log::debug!("GET {}", url);
    let (status, body) = send(client().get(&url).header(CONTENT_TYPE, "application/json")).await?;
    decode_envelope(status, &body)
}

pub async fn create_employee(api: &str, draft: &EmployeeDraft) -> Result<Employee, FetchError> {
    try_create_employee(api, draft)
        .await
        .inspect_err(|e| log::error!("Error creating employee: {}", e))
}

async fn try_create_employee(api: &str, draft: &EmployeeDraft) -> Result<Employee, FetchError> {
    let url = employees_url(api);
    log::debug!("POST {}", url);
    let (status, body) = send(client().post(&url).json(draft)).await?;
    decode_envelope(status, &body)
}

pub async fn update_employee(api: &str, id: &str, draft: &EmployeeDraft) -> Result<Employee, FetchError> {
    try_update_employee(api, id, draft)
        .await
        .inspect_err(|e| log::error!("Error updating employee: {}", e))
}

async fn try_update_employee(api: &str, id: &str, draft: &EmployeeDraft) -> Result<Employee, FetchError> {
    let url = employee_url(api, id);
    log::debug!("PUT {}", url);
    let (status, body) = send(client().put(&url).json(draft)).await?;
    decode_envelope(status, &body)
}

pub async fn delete_employee(api: &str, id: &str) -> Result<(), FetchError> {
    try_delete_employee(api, id)
        .await
        .inspect_err(|e| log::error!("Error deleting employee: {}", e))
}

async fn try_delete_employee(api: &str, id: &str) -> Result<(), FetchError> {
    let url = employee_url(api, id);
    log::debug!("DELETE {}", url);
    let (status, body) = send(client().delete(&url).header(CONTENT_TYPE, "application/json")).await?;
    decode_ack(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nothing listens on the discard port
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    fn logged(needle: &str) -> bool {
        console_logger::recent_lines().iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_employee_urls() {
        assert_eq!(employees_url("http://localhost:8080/sb"), "http://localhost:8080/sb/employees");
        assert_eq!(
            employee_url("http://localhost:8080/sb", "7f3c-11ee"),
            "http://localhost:8080/sb/employees/7f3c-11ee"
        );
        assert_eq!(employee_url("http://h", "a/b"), "http://h/employees/a%2Fb");
    }

    #[test]
    fn test_decode_created_employee() {
        let body = r#"{"status":"success","message":"created","data":
            {"id":"e1","name":"Ayu","position":"QA Engineer","email":"ayu@example.com","created_at":"2024-05-01T10:00:00Z"}}"#;
        let employee: Employee = decode_envelope(201, body).expect("decode");
        assert_eq!(employee.name, "Ayu");
        assert_eq!(employee.created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
    }

    #[tokio::test]
    async fn test_transport_failures_are_logged() {
        let _ = console_logger::init(log::LevelFilter::Info);
        let draft = EmployeeDraft {
            name: "Ayu".to_string(),
            email: "ayu@example.com".to_string(),
            position: "QA Engineer".to_string(),
        };

        let created = create_employee(UNREACHABLE, &draft).await;
        assert!(matches!(created, Err(FetchError::Transport(_))));
        assert!(logged("Error creating employee"));

        assert!(update_employee(UNREACHABLE, "e1", &draft).await.is_err());
        assert!(logged("Error updating employee"));

        assert!(delete_employee(UNREACHABLE, "e1").await.is_err());
        assert!(logged("Error deleting employee"));

        assert!(list_employees(UNREACHABLE).await.is_empty());
        assert!(logged("Error fetching employees"));
    }
}
