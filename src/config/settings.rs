//! User settings for expense-log
//!
//! Persists the monthly budget and display preferences next to the expense
//! file, so the budget survives between sessions.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Money;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for expense-log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly spending ceiling, absent until the user sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<Money>,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: None,
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Defaults are not written back; the caller decides when to persist.
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        read_json(paths.settings_file()).map_err(|e| {
            ExpenseError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
