//! Interactive numbered menu
//!
//! Drives the ledger from prompts. Each field is re-prompted until it
//! validates, so a typo never reaches the ledger. Input and output are generic
//! so the menu can be scripted in tests.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_budget_status, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::{normalize_category, parse_amount, validate_description};
use crate::models::{parse_date, Expense, Ledger, DATE_FORMAT_HINT};
use crate::storage::Storage;

/// One of the five menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    SetBudget,
    BudgetStatus,
    SaveAndExit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::ViewExpenses),
            "3" => Some(Self::SetBudget),
            "4" => Some(Self::BudgetStatus),
            "5" => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

const MENU: &str = "\
Personal Expense Log
1. Add Expense
2. View Expenses
3. Set Monthly Budget
4. View Budget Status
5. Save & Exit";

/// The interactive session state
pub struct InteractiveMenu<'a, R, W> {
    storage: &'a Storage,
    settings: &'a mut Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> InteractiveMenu<'a, R, W> {
    /// Create a new menu over the given input and output
    pub fn new(storage: &'a Storage, settings: &'a mut Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
        }
    }

    /// Run until the user saves and exits
    ///
    /// A failed save is reported and still ends the session; the only error
    /// returned is losing the input stream.
    pub fn run(&mut self, ledger: &mut Ledger) -> ExpenseResult<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let line = self.prompt("Enter your choice (1-5): ")?;

            let Some(choice) = MenuChoice::from_input(&line) else {
                writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1-5."
                )?;
                continue;
            };

            match choice {
                MenuChoice::AddExpense => self.add_expense(ledger)?,
                MenuChoice::ViewExpenses => self.view_expenses(ledger)?,
                MenuChoice::SetBudget => self.set_budget(ledger)?,
                MenuChoice::BudgetStatus => self.budget_status(ledger)?,
                MenuChoice::SaveAndExit => {
                    self.save(ledger)?;
                    return Ok(());
                }
            }
        }
    }

    fn add_expense(&mut self, ledger: &mut Ledger) -> ExpenseResult<()> {
        writeln!(self.output, "\nAdd New Expense")?;

        let date = self.prompt_until(&format!("Enter date ({}): ", DATE_FORMAT_HINT), parse_date)?;
        let category =
            self.prompt_until("Enter category (e.g., Food, Travel): ", normalize_category)?;
        let amount = self.prompt_until("Enter amount spent: ", parse_amount)?;
        let description = self.prompt_until("Enter description: ", validate_description)?;

        match ledger.push(Expense::from_validated(date, category, amount, description)) {
            Ok(_) => writeln!(self.output, "Expense added successfully!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn view_expenses(&mut self, ledger: &Ledger) -> ExpenseResult<()> {
        writeln!(
            self.output,
            "\n{}",
            format_expense_list(ledger, &self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn set_budget(&mut self, ledger: &mut Ledger) -> ExpenseResult<()> {
        let budget = self.prompt_until("\nEnter your monthly budget: ", |input| {
            ledger.set_budget_from_str(input)
        })?;
        writeln!(
            self.output,
            "Monthly budget set to {}",
            budget.format_with_symbol(&self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn budget_status(&mut self, ledger: &Ledger) -> ExpenseResult<()> {
        match ledger.budget_status() {
            Ok(status) => writeln!(
                self.output,
                "\n{}",
                format_budget_status(&status, &self.settings.currency_symbol)
            )?,
            Err(ExpenseError::BudgetNotSet) => {
                writeln!(self.output, "\nPlease set your monthly budget first.")?
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn save(&mut self, ledger: &Ledger) -> ExpenseResult<()> {
        match self.storage.save_all(ledger, self.settings) {
            Ok(()) => writeln!(self.output, "\nExpenses saved successfully. Goodbye!")?,
            Err(e) => {
                tracing::error!("save failed: {}", e);
                writeln!(
                    self.output,
                    "\nWarning: Expenses may not have saved correctly ({}).",
                    e
                )?;
            }
        }
        Ok(())
    }

    /// Prompt until `parse` accepts the input, printing each validation error
    fn prompt_until<T, F>(&mut self, prompt: &str, mut parse: F) -> ExpenseResult<T>
    where
        F: FnMut(&str) -> ExpenseResult<T>,
    {
        loop {
            let line = self.prompt(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_validation() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Prompt for a line of input
    fn prompt(&mut self, prompt: &str) -> ExpenseResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        let read = self.input.read_line(&mut input)?;
        if read == 0 {
            return Err(ExpenseError::Io("input closed".into()));
        }

        Ok(input.trim().to_string())
    }
}
