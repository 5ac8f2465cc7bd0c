//! expense-log - Terminal-based personal expense log
//!
//! This library provides the core functionality for the expense-log
//! application: a ledger of dated, categorized expenses persisted to a CSV
//! file, with spending reported against a monthly budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, expenses and the in-memory ledger
//! - `storage`: CSV codec and atomic file storage
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu and one-shot commands
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_log::config::{ExpensePaths, Settings};
//! use expense_log::storage::Storage;
//!
//! # fn main() -> Result<(), expense_log::ExpenseError> {
//! let paths = ExpensePaths::new()?;
//! let mut settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths);
//!
//! let mut ledger = storage.load_ledger(&settings);
//! ledger.add("05-03-2024", "food", "12.50", "Lunch")?;
//! storage.save_all(&ledger, &mut settings)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
