//! User settings for the expense tracker
//!
//! Settings live in `config.json` next to the data file. Every field has a
//! default, so a missing file or a partial one is fine. The file is only
//! read, never written.

use serde::Deserialize;

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults if the file doesn't exist
    pub fn load(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Like [`Settings::load`], but an unreadable or malformed file only
    /// costs a warning; display preferences never block a command.
    pub fn load_or_default(paths: &ExpensePaths) -> Self {
        Self::load(paths).unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                path = %paths.settings_file().display(),
                "ignoring settings file, using defaults"
            );
            Settings::default()
        })
    }
}
