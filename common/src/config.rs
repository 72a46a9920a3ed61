//! Seeder configuration.
//!
//! Values come from an optional `.env` file and then the process environment.
//! Only the connection string matters to the seeding procedures; the rest
//! configures logging.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Connection string used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "data/elearning.db";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_url: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Reads the configuration from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup, applying defaults
    /// for anything missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Config {
            project_name: get("PROJECT_NAME", "elearning-seeder"),
            log_level: get("LOG_LEVEL", "info"),
            log_file: get("LOG_FILE", "logs/seeder.log"),
            log_to_stdout: get("LOG_TO_STDOUT", "false").eq_ignore_ascii_case("true"),
            database_url: get("DATABASE_URL", DEFAULT_DATABASE_URL),
        }
    }

    /// Loads `env_path` (if present) and initialises the global configuration.
    ///
    /// Later calls return the configuration from the first call.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();
        CONFIG.get_or_init(Self::from_env)
    }
}

/// Returns true when `value` is a plain file path rather than a DSN.
pub fn is_file_path(value: &str) -> bool {
    !(value.starts_with("sqlite:") || value.contains("://"))
}

/// Turns a bare file path into a SQLite DSN (creating its parent directory);
/// DSNs pass through untouched. Only SQLite DSNs can actually be opened.
pub fn connection_url(value: &str) -> String {
    if !is_file_path(value) {
        return value.to_string();
    }

    // SQLite won't create intermediate directories.
    if let Some(parent) = Path::new(value).parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            log::warn!("Could not create {}: {}", parent.display(), err);
        }
    }
    format!("sqlite://{}?mode=rwc", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, "logs/seeder.log");
        assert!(!config.log_to_stdout);
    }

    #[test]
    fn environment_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("LOG_LEVEL", "debug"),
            ("LOG_TO_STDOUT", "TRUE"),
        ]));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.log_level, "debug");
        assert!(config.log_to_stdout);
    }

    #[test]
    fn dsns_pass_through_unchanged() {
        assert_eq!(connection_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            connection_url("postgres://localhost/elearning"),
            "postgres://localhost/elearning"
        );
        assert!(!is_file_path("sqlite://data/x.db"));
    }

    #[test]
    fn bare_paths_become_sqlite_dsns() {
        let dir = std::env::temp_dir().join("seeder-config-test");
        let path = dir.join("nested").join("elearning.db");
        let path = path.to_string_lossy().to_string();

        assert!(is_file_path(&path));
        assert_eq!(connection_url(&path), format!("sqlite://{}?mode=rwc", path));
        assert!(dir.join("nested").exists());
    }

    #[test]
    fn uncreatable_parent_still_yields_a_dsn() {
        let blocker = std::env::temp_dir().join("seeder-config-blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let path = blocker.join("sub").join("elearning.db");
        let path = path.to_string_lossy().to_string();

        assert_eq!(connection_url(&path), format!("sqlite://{}?mode=rwc", path));
        assert!(!blocker.join("sub").exists());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "   ")]));
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }
}
