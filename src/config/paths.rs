//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. `~/.expense_tracker` under the user's home directory

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

const DATA_DIR_NAME: &str = ".expense_tracker";
const DATA_FILE_NAME: &str = "data.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory holding the data file and settings
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.expense_tracker/ or the override)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the persisted document
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join(DATA_FILE_NAME)
    }

    /// Get the path a corrupt data file is moved aside to
    pub fn backup_file(&self) -> PathBuf {
        self.data_file().with_extension("bak")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| ExpenseError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(DATA_DIR_NAME))
}
