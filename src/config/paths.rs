//! Path management for expense-log
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LOG_DATA_DIR` environment variable (if set)
//! 2. The current working directory
//!
//! The expense file defaults to `expenses.csv` inside the data directory and
//! can be pointed elsewhere with [`ExpensePaths::with_expenses_file`].

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Default file name for the persisted expense table
pub const DEFAULT_EXPENSES_FILE: &str = "expenses.csv";

/// Default file name for user settings
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Manages all paths used by expense-log
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense-log data
    base_dir: PathBuf,
    /// Explicit expense file location, overriding the default
    expenses_file: Option<PathBuf>,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// Path resolution:
    /// 1. `EXPENSE_LOG_DATA_DIR` env var (explicit override)
    /// 2. The current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var("EXPENSE_LOG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine current directory: {}", e))
            })?
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            expenses_file: None,
        }
    }

    /// Override the location of the expense file
    pub fn with_expenses_file(mut self, path: PathBuf) -> Self {
        self.expenses_file = Some(path);
        self
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the expense table (expenses.csv unless overridden)
    pub fn expenses_file(&self) -> PathBuf {
        self.expenses_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join(DEFAULT_EXPENSES_FILE))
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(DEFAULT_SETTINGS_FILE)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))
    }
}
