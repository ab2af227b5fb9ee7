//! Team Roster Helpers
//!
//! Validation, search and stats for the employee table.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Employee, EmployeeDraft};

/// Word the user must type to confirm a delete
pub const DELETE_CONFIRMATION: &str = "DELETE";

/// Position options for the employee form
pub const POSITIONS: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Mobile App Developer",
    "DevOps Engineer",
    "Data Scientist",
    "AI/ML Engineer",
    "UI/UX Designer",
    "Product Manager",
    "Project Manager",
    "QA Engineer",
    "System Administrator",
    "Developer",
    "Senior Developer",
    "Lead Developer",
    "Software Engineer",
    "Senior Software Engineer",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Check a form draft before it is sent
pub fn validate(draft: &EmployeeDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() || draft.email.trim().is_empty() || draft.position.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !email_regex().is_match(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Case-insensitive match on name, position or email
pub fn search<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let term = term.to_lowercase();
    employees
        .iter()
        .filter(|emp| {
            emp.name.to_lowercase().contains(&term)
                || emp.position.to_lowercase().contains(&term)
                || emp.email.to_lowercase().contains(&term)
        })
        .collect()
}

/// Number of distinct positions held
pub fn distinct_positions(employees: &[Employee]) -> usize {
    employees
        .iter()
        .map(|emp| emp.position.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Avatar letter for a name
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// First 8 characters of an id, for compact display
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
