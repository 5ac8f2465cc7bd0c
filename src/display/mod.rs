//! Display formatting for terminal output
//!
//! Provides utilities for formatting the expense table and budget summary.

pub mod expense;

pub use expense::{format_budget_status, format_expense_list};
