//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Response envelope shared by every backend endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: String,
    /// Absent or `null` both decode to `None`
    pub data: Option<T>,
}

/// Project record as returned by `GET /projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// First entry is the cover
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Employee record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update payload for an employee
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub position: String,
}

impl EmployeeDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
        }
    }
}
