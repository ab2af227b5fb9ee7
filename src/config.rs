//! Application Configuration
//!
//! Backend endpoints and log level, baked in at build time from
//! `FOLIO_*` environment variables with logged fallbacks.

use log::LevelFilter;

pub const DEFAULT_PROJECTS_API: &str = "https://web-production-8511.up.railway.app/api";
pub const DEFAULT_ASSET_ORIGIN: &str = "https://web-production-8511.up.railway.app";
pub const DEFAULT_EMPLOYEES_API: &str = "http://localhost:8080/sb";

/// Endpoints provided to components via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base of the project list API (`{projects_api}/projects`)
    pub projects_api: String,
    /// Base of the employee CRUD API (`{employees_api}/employees`)
    pub employees_api: String,
    /// Origin prefixed to relative image paths
    pub asset_origin: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            projects_api: resolve("FOLIO_PROJECTS_API", option_env!("FOLIO_PROJECTS_API"), DEFAULT_PROJECTS_API),
            employees_api: resolve("FOLIO_EMPLOYEES_API", option_env!("FOLIO_EMPLOYEES_API"), DEFAULT_EMPLOYEES_API),
            asset_origin: resolve("FOLIO_ASSET_ORIGIN", option_env!("FOLIO_ASSET_ORIGIN"), DEFAULT_ASSET_ORIGIN),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            projects_api: DEFAULT_PROJECTS_API.to_string(),
            employees_api: DEFAULT_EMPLOYEES_API.to_string(),
            asset_origin: DEFAULT_ASSET_ORIGIN.to_string(),
        }
    }
}

/// Install the console logger at the `FOLIO_LOG_LEVEL` level
pub fn init_logging() -> LevelFilter {
    install_logger(option_env!("FOLIO_LOG_LEVEL"))
}

fn install_logger(raw: Option<&str>) -> LevelFilter {
    let parsed = parse_level(raw);
    let level = parsed.clone().unwrap_or(LevelFilter::Info);

    if let Err(e) = console_logger::init(level) {
        log::warn!("[APP] logger already installed: {}", e);
    }
    // Reported only now that a logger exists
    if let Err(rejected) = parsed {
        log::warn!("FOLIO_LOG_LEVEL={:?} is not a log level, using info", rejected);
    }
    level
}

/// Unset or blank means `info`; anything unparsable is handed back
fn parse_level(raw: Option<&str>) -> Result<LevelFilter, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(LevelFilter::Info),
        Some(v) => v.parse().map_err(|_| v.to_string()),
    }
}

fn resolve(key: &str, value: Option<&str>, default: &str) -> String {
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => {
            log::info!("{} not set, using default: {}", key, default);
            default
        }
    };
    value.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(resolve("X", None, DEFAULT_PROJECTS_API), DEFAULT_PROJECTS_API);
        assert_eq!(resolve("X", Some("  "), DEFAULT_EMPLOYEES_API), DEFAULT_EMPLOYEES_API);
    }

    #[test]
    fn test_resolve_trims_trailing_slash() {
        assert_eq!(resolve("X", Some("https://api.example.com/v1/"), "unused"), "https://api.example.com/v1");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Ok(LevelFilter::Debug));
        assert_eq!(parse_level(Some("WARN")), Ok(LevelFilter::Warn));
        assert_eq!(parse_level(Some(" ")), Ok(LevelFilter::Info));
        assert_eq!(parse_level(None), Ok(LevelFilter::Info));
        assert_eq!(parse_level(Some("loud")), Err("loud".to_string()));
    }

    #[test]
    fn test_unparsable_level_warns_and_uses_info() {
        assert_eq!(install_logger(Some("loud")), LevelFilter::Info);

        let lines = console_logger::recent_lines();
        assert!(
            lines.iter().any(|l| l.contains("WARN") && l.contains("\"loud\" is not a log level")),
            "missing warning in {:?}",
            lines
        );
    }
}
