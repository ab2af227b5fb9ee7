//! Team Roster Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Employee;

/// Employee list shared by the team table and its modals
#[derive(Clone, Debug, Store)]
pub struct TeamState {
    /// Employees as last fetched
    pub employees: Vec<Employee>,
    /// A list fetch is in flight
    pub loading: bool,
}

impl TeamState {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            loading: true,
        }
    }
}

/// Type alias for the store
pub type TeamStore = Store<TeamState>;

/// Get the team store from context
pub fn use_team_store() -> TeamStore {
    expect_context::<TeamStore>()
}

/// Replace the roster after a fetch
pub fn store_set_employees(store: &TeamStore, employees: Vec<Employee>) {
    store.employees().set(employees);
    store.loading().set(false);
}
