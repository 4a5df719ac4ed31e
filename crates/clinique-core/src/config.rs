//! Store configuration.
//!
//! Resolved once at process startup and passed to [`crate::db::Database::open_with_config`].
//! Library code never reads the environment while serving a call.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Directory holding the database file. Required.
pub const DATA_DIR_ENV: &str = "CLINIQUE_DATA_DIR";

/// Database name, without extension.
pub const DB_NAME_ENV: &str = "CLINIQUE_DB_NAME";

pub const DEFAULT_DB_NAME: &str = "la_clinique";

const DB_FILE_EXTENSION: &str = "sqlite3";

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVariable(&'static str),

    #[error("Invalid database name '{0}': use letters, digits, '_' or '-'")]
    InvalidDatabaseName(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Location of the document store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    data_dir: PathBuf,
    db_name: String,
}

impl StoreConfig {
    pub fn new(data_dir: PathBuf, db_name: impl Into<String>) -> ConfigResult<Self> {
        let db_name = db_name.into();
        let valid = !db_name.is_empty()
            && db_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ConfigError::InvalidDatabaseName(db_name));
        }
        Ok(Self { data_dir, db_name })
    }

    /// Build from raw variable values. Blank values count as unset.
    pub fn from_env_values(data_dir: Option<String>, db_name: Option<String>) -> ConfigResult<Self> {
        let data_dir = non_blank(data_dir).ok_or(ConfigError::MissingVariable(DATA_DIR_ENV))?;
        let db_name = non_blank(db_name).unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
        Self::new(PathBuf::from(data_dir), db_name)
    }

    /// Read [`DATA_DIR_ENV`] and [`DB_NAME_ENV`] from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_values(
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var(DB_NAME_ENV).ok(),
        )
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", self.db_name, DB_FILE_EXTENSION))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
