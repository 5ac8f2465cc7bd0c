//! Configuration module for expense-log
//!
//! This module provides configuration management including:
//! - Data directory and file path resolution
//! - User settings persistence (monthly budget, currency symbol)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
