//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank variables count as unset.
//! - Every field has a usable default; resolution never fails.

use addressbook_core::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "ADDRESSBOOK_DB_PATH";
pub const LOG_DIR_VAR: &str = "ADDRESSBOOK_LOG_DIR";
pub const LOG_LEVEL_VAR: &str = "ADDRESSBOOK_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "addressbook.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "addressbook-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Snapshot database file.
    pub db_path: PathBuf,
    /// Absolute directory for rolling logs.
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_VAR)
                .map_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME), PathBuf::from),
            log_dir: non_blank(LOG_DIR_VAR).map_or_else(
                || std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
                PathBuf::from,
            ),
            log_level: non_blank(LOG_LEVEL_VAR)
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}
