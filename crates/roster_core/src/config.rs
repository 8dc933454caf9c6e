//! Runtime configuration for roster front ends.
//!
//! # Responsibility
//! - Resolve storage key, database path and logging settings.
//! - Apply `ROSTER_*` environment overrides on top of defaults.
//!
//! # Invariants
//! - Blank environment values are ignored, never applied as empty settings.

use crate::logging::default_log_level;
use crate::repo::roster_repo::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "roster.sqlite3";

pub const ENV_STORAGE_KEY: &str = "ROSTER_STORAGE_KEY";
pub const ENV_DB_PATH: &str = "ROSTER_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "ROSTER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ROSTER_LOG_DIR";

/// Settings shared by every roster front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Key of the persisted roster blob.
    pub storage_key: String,
    /// SQLite file backing the durable store.
    pub db_path: PathBuf,
    /// `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` keeps logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl RosterConfig {
    /// Defaults overridden by `ROSTER_*` process environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from any variable lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|trimmed| !trimmed.is_empty())
        };

        if let Some(key) = value(ENV_STORAGE_KEY) {
            self.storage_key = key;
        }
        if let Some(path) = value(ENV_DB_PATH) {
            self.db_path = PathBuf::from(path);
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(dir) = value(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{RosterConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_STORAGE_KEY};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn defaults_use_browser_storage_key() {
        let config = RosterConfig::default();
        assert_eq!(config.storage_key, "employeeArray");
        assert!(config.db_path.ends_with("roster.sqlite3"));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn overrides_apply_trimmed_values_and_skip_blank_ones() {
        let vars = HashMap::from([
            (ENV_STORAGE_KEY, "  staff  ".to_string()),
            (ENV_DB_PATH, "   ".to_string()),
            (ENV_LOG_DIR, "/var/log/roster".to_string()),
        ]);
        let config = RosterConfig::default().with_overrides(|name| vars.get(name).cloned());

        assert_eq!(config.storage_key, "staff");
        assert_eq!(config.db_path, RosterConfig::default().db_path);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/roster")));
    }
}
