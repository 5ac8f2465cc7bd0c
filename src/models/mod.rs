//! Core data models for expense-log
//!
//! This module contains the data structures that represent the expense log:
//! money amounts, individual expenses and the ledger that holds them.

pub mod expense;
pub mod ledger;
pub mod money;

pub use expense::{format_date, parse_date, Expense, DATE_FORMAT_HINT};
pub use ledger::{BudgetStatus, Ledger};
pub use money::Money;
