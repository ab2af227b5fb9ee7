//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Trigger to reload the team roster - read
    pub team_reload: ReadSignal<u32>,
    /// Trigger to reload the team roster - write
    set_team_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig, team_reload: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            config: StoredValue::new(config),
            team_reload: team_reload.0,
            set_team_reload: team_reload.1,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Trigger a reload of employees
    pub fn reload_team(&self) {
        self.set_team_reload.update(|v| *v += 1);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
