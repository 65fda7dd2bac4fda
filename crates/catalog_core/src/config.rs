//! Runtime configuration for embedding the catalog core.
//!
//! Values come from environment variables; anything unset falls back to a
//! default that works for local runs (in-memory database, no file logs).

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::logging::{default_log_level, init_logging, LoggingError};
use rusqlite::Connection;
use std::env;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "CATALOG_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "CATALOG_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "CATALOG_LOG_DIR";
pub const ENV_SEED_DEMO: &str = "CATALOG_SEED_DEMO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Database file. `None` keeps the catalog in memory.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// File logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    /// Seed the demo catalog after opening an empty database.
    pub seed_demo: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_demo: false,
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: value(ENV_DB_PATH).map(PathBuf::from),
            log_level: value(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: value(ENV_LOG_DIR).map(PathBuf::from),
            seed_demo: value(ENV_SEED_DEMO)
                .map(|raw| parse_flag(&raw))
                .unwrap_or(defaults.seed_demo),
        }
    }

    /// Starts file logging when `log_dir` is set. Returns whether it runs.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        match &self.log_dir {
            Some(dir) => init_logging(&self.log_level, dir).map(|()| true),
            None => Ok(false),
        }
    }

    /// Opens the configured database with migrations applied.
    pub fn open_connection(&self) -> DbResult<Connection> {
        match &self.db_path {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_DB_PATH, ENV_LOG_LEVEL, ENV_SEED_DEMO};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> CoreConfig {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CoreConfig::from_lookup(|key| values.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), CoreConfig::default());
    }

    #[test]
    fn values_are_read_and_blank_ones_ignored() {
        let config = config_from(&[
            (ENV_DB_PATH, "/tmp/catalog.sqlite3"),
            (ENV_LOG_LEVEL, "   "),
            (ENV_SEED_DEMO, "Yes"),
        ]);
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/catalog.sqlite3")));
        assert_eq!(config.log_level, CoreConfig::default().log_level);
        assert!(config.seed_demo);
    }

    #[test]
    fn in_memory_connection_opens_without_path() {
        let conn = CoreConfig::default().open_connection().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sectors;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
