use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expense_log::cli::{handle_command, Commands};
use expense_log::config::{paths::ExpensePaths, settings::Settings};
use expense_log::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-log",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense log",
    long_about = "expense-log records dated, categorized expenses in a CSV file \
                  and reports how your spending compares with a monthly budget. \
                  Run it without a subcommand for the interactive menu."
)]
struct Cli {
    /// Directory holding expenses.csv and settings.json
    #[arg(long, global = true, env = "EXPENSE_LOG_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Use this CSV file instead of <data dir>/expenses.csv
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Log diagnostics at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Initialize paths and settings
    let mut paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    if let Some(file) = cli.file {
        paths = paths.with_expenses_file(file);
    }
    let mut settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths);

    handle_command(
        &storage,
        &mut settings,
        cli.command.unwrap_or(Commands::Menu),
    )?;

    Ok(())
}

/// Send diagnostics to stderr so they never mix with menu output
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "expense_log=debug"
    } else {
        "expense_log=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
