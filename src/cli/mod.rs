//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot commands,
//! bridging the clap argument parsing with the ledger and storage layers.

pub mod commands;
pub mod menu;

pub use commands::{handle_command, BudgetCommands, Commands};
pub use menu::{InteractiveMenu, MenuChoice};

use std::io;

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Load the ledger and run the interactive menu on stdin/stdout
pub fn run_interactive(storage: &Storage, settings: &mut Settings) -> ExpenseResult<()> {
    let mut ledger = storage.load_ledger(settings);
    let stdin = io::stdin();
    let mut menu = InteractiveMenu::new(storage, settings, stdin.lock(), io::stdout());
    menu.run(&mut ledger)
}
