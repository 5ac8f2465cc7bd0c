//! Storage layer for expense-log
//!
//! Keeps the ledger in a CSV file and the budget in the settings file. Loading
//! fails open: a missing file is an empty ledger, and an unreadable one is
//! reported with a warning and also treated as empty. Saving rewrites the whole
//! file atomically.

pub mod csv_codec;
pub mod file_io;

pub use csv_codec::{decode_expenses, decode_lenient, encode_expenses, DecodeReport, DroppedRow};
pub use file_io::{read_json, write_atomic, write_json_atomic};

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::config::{paths::ExpensePaths, settings::Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Ledger;

/// The CSV file holding the expense table
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store for the given file. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the expense file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, reporting I/O failures and dropped rows to the caller
    ///
    /// A missing file yields an empty report.
    pub fn try_load(&self) -> ExpenseResult<DecodeReport> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DecodeReport::default()),
            Err(e) => {
                return Err(ExpenseError::Io(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        decode_lenient(BufReader::new(file))
    }

    /// Load a ledger, never failing
    ///
    /// I/O errors leave the ledger empty and are logged as warnings; dropped
    /// rows are logged individually at debug level.
    pub fn load(&self) -> Ledger {
        match self.try_load() {
            Ok(report) => {
                for row in &report.dropped {
                    tracing::debug!(
                        file = %self.path.display(),
                        line = ?row.line,
                        "skipped malformed row: {}",
                        row.reason
                    );
                }
                if !report.dropped.is_empty() {
                    tracing::warn!(
                        "skipped {} malformed row(s) in {}",
                        report.dropped.len(),
                        self.path.display()
                    );
                }
                let mut ledger = Ledger::new();
                for expense in report.expenses {
                    if let Err(e) = ledger.push(expense) {
                        tracing::warn!("skipped row in {}: {}", self.path.display(), e);
                    }
                }
                tracing::debug!(
                    "loaded {} expense(s) from {}",
                    ledger.len(),
                    self.path.display()
                );
                ledger
            }
            Err(e) => {
                tracing::warn!("could not load expenses, starting empty: {}", e);
                Ledger::new()
            }
        }
    }

    /// Overwrite the file with every expense in the ledger
    ///
    /// On failure the previous file is left intact and the ledger is unchanged.
    pub fn save(&self, ledger: &Ledger) -> ExpenseResult<()> {
        write_atomic(&self.path, |writer| encode_expenses(writer, ledger.list()))?;
        tracing::debug!(
            "saved {} expense(s) to {}",
            ledger.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Main storage coordinator: the expense file plus user settings
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Self {
        Self {
            expenses: ExpenseStore::new(paths.expenses_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load the ledger and apply the saved monthly budget
    pub fn load_ledger(&self, settings: &Settings) -> Ledger {
        let mut ledger = self.expenses.load();
        if let Some(budget) = settings.monthly_budget {
            if let Err(e) = ledger.set_budget(budget) {
                tracing::warn!("ignoring saved budget {}: {}", budget, e);
            }
        }
        ledger
    }

    /// Save the expense file, then record the ledger's budget in settings
    pub fn save_all(&self, ledger: &Ledger, settings: &mut Settings) -> ExpenseResult<()> {
        self.expenses.save(ledger)?;
        if settings.monthly_budget != ledger.budget() {
            settings.monthly_budget = ledger.budget();
            settings.save(&self.paths)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add("01-05-2024", "rent", "950", "May rent").unwrap();
        ledger.add("03-05-2024", "Food", "23.99", "Groceries, market").unwrap();
        ledger.add("04-05-2024", "fun", "15.5", "Cinema \"IMAX\"").unwrap();
        ledger
    }

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));

        let ledger = store.load();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_spent(), Money::zero());
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        let ledger = sample_ledger();

        store.save(&ledger).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.list(), ledger.list());

        store.save(&loaded).unwrap();
        let reloaded = store.load();
        assert_eq!(reloaded.list(), ledger.list());
    }

    #[test]
    fn test_load_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        store.save(&sample_ledger()).unwrap();

        assert_eq!(store.load(), store.load());
    }

    #[test]
    fn test_load_filters_malformed_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        std::fs::write(
            &path,
            "date,category,amount,description\n\
             01-05-2024,Food,10.00,Pizza\n\
             02-05-2024,Food,ten,Pasta\n",
        )
        .unwrap();

        let ledger = ExpenseStore::new(&path).load();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list()[0].description(), "Pizza");
    }

    #[test]
    fn test_load_drops_row_that_overflows_total() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        std::fs::write(
            &path,
            "date,category,amount,description\n\
             01-05-2024,Food,90000000000000000,First\n\
             02-05-2024,Food,90000000000000000,Second\n",
        )
        .unwrap();

        let ledger = ExpenseStore::new(&path).load();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list()[0].description(), "First");
        assert_eq!(
            ledger.total_spent(),
            Money::from_cents(9_000_000_000_000_000_000)
        );
    }

    #[test]
    fn test_extra_precision_is_rounded_on_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        std::fs::write(
            &path,
            "date,category,amount,description\n01-03-2024,Food,9.999,Snack\n",
        )
        .unwrap();
        let store = ExpenseStore::new(&path);

        let ledger = store.load();
        assert_eq!(ledger.list()[0].amount(), Money::from_cents(1000));
        store.save(&ledger).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("01-03-2024,Food,10.00,Snack"));
        assert!(!contents.contains("9.999"));
        assert_eq!(store.load(), ledger);
    }

    #[test]
    fn test_unreadable_source_fails_open() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be read as a file
        let store = ExpenseStore::new(temp_dir.path());

        assert!(store.try_load().is_err());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_failed_save_reports_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let store = ExpenseStore::new(blocker.join("expenses.csv"));

        let ledger = sample_ledger();
        assert!(store.save(&ledger).is_err());
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_storage_persists_budget_in_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone());

        let mut settings = Settings::default();
        let mut ledger = storage.load_ledger(&settings);
        ledger.add("01-05-2024", "Food", "120", "Feast").unwrap();
        ledger.set_budget(Money::from_cents(10_000)).unwrap();
        storage.save_all(&ledger, &mut settings).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        let reloaded = storage.load_ledger(&settings);
        let status = reloaded.budget_status().unwrap();
        assert_eq!(status.spent, Money::from_cents(12_000));
        assert_eq!(status.remaining, Money::from_cents(-2_000));
    }
}
