//! Expense and budget display formatting
//!
//! Formats the ledger for terminal output: the expense table and the budget
//! summary.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{format_date, BudgetStatus, Ledger};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format all expenses as a table, followed by the total
pub fn format_expense_list(ledger: &Ledger, symbol: &str) -> String {
    let expenses = ledger.list();
    if expenses.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        date: format_date(e.date()),
        category: e.category().to_string(),
        amount: e.amount().format_with_symbol(symbol),
        description: e.description().to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(2), Alignment::right());

    format!(
        "{}\n\n{} expense(s), total {}",
        table,
        expenses.len(),
        ledger.total_spent().format_with_symbol(symbol)
    )
}

/// Format the budget summary, flagging overspend
pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Budget Summary\n");
    output.push_str(&format!(
        "Monthly Budget:   {}\n",
        status.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses:   {}\n",
        status.spent.format_with_symbol(symbol)
    ));

    match status.overspend() {
        Some(over) => output.push_str(&format!(
            "Over budget by {}!",
            over.format_with_symbol(symbol)
        )),
        None => output.push_str(&format!(
            "Remaining Budget: {}",
            status.remaining.format_with_symbol(symbol)
        )),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&Ledger::new(), "$"), "No expenses recorded yet.");
    }

    #[test]
    fn test_list_contains_rows_and_total() {
        let mut ledger = Ledger::new();
        ledger.add("01-05-2024", "food", "12.5", "Pizza").unwrap();
        ledger.add("02-05-2024", "travel", "7", "Bus").unwrap();

        let output = format_expense_list(&ledger, "$");
        assert!(output.contains("Date"));
        assert!(output.contains("01-05-2024"));
        assert!(output.contains("Food"));
        assert!(output.contains("$12.50"));
        assert!(output.contains("Bus"));
        assert!(output.contains("2 expense(s), total $19.50"));

        // Insertion order is kept
        assert!(output.find("Pizza").unwrap() < output.find("Bus").unwrap());
    }

    #[test]
    fn test_budget_status_remaining() {
        let status = BudgetStatus {
            budget: Money::from_cents(10_000),
            spent: Money::from_cents(4_000),
            remaining: Money::from_cents(6_000),
        };
        let output = format_budget_status(&status, "$");
        assert!(output.contains("Monthly Budget:   $100.00"));
        assert!(output.contains("Remaining Budget: $60.00"));
    }

    #[test]
    fn test_budget_status_overspent() {
        let status = BudgetStatus {
            budget: Money::from_cents(10_000),
            spent: Money::from_cents(12_000),
            remaining: Money::from_cents(-2_000),
        };
        let output = format_budget_status(&status, "$");
        assert!(output.contains("Total Expenses:   $120.00"));
        assert!(output.contains("Over budget by $20.00!"));
        assert!(!output.contains("Remaining"));
    }
}
