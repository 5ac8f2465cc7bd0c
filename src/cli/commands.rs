//! One-shot CLI commands
//!
//! Non-interactive counterparts of the menu actions. Commands that change the
//! ledger save it before returning.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_status, format_expense_list};
use crate::error::ExpenseResult;
use crate::models::{format_date, Money};
use crate::storage::Storage;

use super::run_interactive;

/// Top-level subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive menu (the default)
    Menu,

    /// Record a new expense and save
    Add {
        /// Date of the expense (DD-MM-YYYY)
        #[arg(short, long)]
        date: String,
        /// Category, letters only (e.g. Food, Travel)
        #[arg(short, long)]
        category: String,
        /// Amount spent (e.g. "12.50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        #[arg(short = 'm', long)]
        description: String,
    },

    /// List all recorded expenses
    #[command(alias = "ls")]
    List,

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show resolved paths and settings
    Config,
}

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Budget amount (e.g. "1500" or "1500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show spending against the monthly budget
    Status,
}

/// Handle a one-shot command
pub fn handle_command(storage: &Storage, settings: &mut Settings, cmd: Commands) -> ExpenseResult<()> {
    match cmd {
        Commands::Menu => run_interactive(storage, settings)?,
        Commands::Add {
            date,
            category,
            amount,
            description,
        } => {
            let mut ledger = storage.load_ledger(settings);
            let added = ledger.add(&date, &category, &amount, &description)?.clone();
            storage.save_all(&ledger, settings)?;
            println!(
                "Added expense: {} {} {} ({})",
                format_date(added.date()),
                added.category(),
                added.amount().format_with_symbol(&settings.currency_symbol),
                added.description()
            );
        }
        Commands::List => {
            let ledger = storage.load_ledger(settings);
            println!(
                "{}",
                format_expense_list(&ledger, &settings.currency_symbol)
            );
        }
        Commands::Budget(BudgetCommands::Set { amount }) => {
            let mut ledger = storage.load_ledger(settings);
            let budget: Money = ledger.set_budget_from_str(&amount)?;
            settings.monthly_budget = Some(budget);
            settings.save(storage.paths())?;
            println!(
                "Monthly budget set to {}",
                budget.format_with_symbol(&settings.currency_symbol)
            );
        }
        Commands::Budget(BudgetCommands::Status) => {
            let ledger = storage.load_ledger(settings);
            let status = ledger.budget_status()?;
            println!(
                "{}",
                format_budget_status(&status, &settings.currency_symbol)
            );
        }
        Commands::Config => {
            let paths = storage.paths();
            println!("expense-log Configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expense file:   {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            match settings.monthly_budget {
                Some(budget) => println!(
                    "  Monthly budget:  {}",
                    budget.format_with_symbol(&settings.currency_symbol)
                ),
                None => println!("  Monthly budget:  (not set)"),
            }
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
    }

    Ok(())
}
