//! Ledger model
//!
//! The in-memory expense log: an ordered list of validated expenses plus the
//! monthly budget. The ledger knows nothing about files; see
//! [`crate::storage`] for persistence.

use super::expense::Expense;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Spending measured against the configured monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    /// The configured monthly budget
    pub budget: Money,
    /// Sum of all recorded expenses
    pub spent: Money,
    /// `budget - spent`; negative when overspent
    pub remaining: Money,
}

impl BudgetStatus {
    /// Check if spending has exceeded the budget
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// The amount spent beyond the budget, if any
    pub fn overspend(&self) -> Option<Money> {
        self.is_over_budget().then(|| self.remaining.abs())
    }
}

/// Ordered expenses plus the monthly budget
///
/// The running total is kept alongside the expenses; an expense that would
/// overflow it is rejected, so `total_spent` never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    expenses: Vec<Expense>,
    total: Money,
    budget: Option<Money>,
}

impl Ledger {
    /// Create an empty ledger with no budget configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw input and append it as a new expense
    ///
    /// On error the ledger is left untouched.
    pub fn add(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> ExpenseResult<&Expense> {
        let expense = Expense::parse(date, category, amount, description)?;
        self.push(expense)
    }

    /// Append an already-validated expense
    ///
    /// Fails, leaving the ledger untouched, if the total would overflow.
    pub fn push(&mut self, expense: Expense) -> ExpenseResult<&Expense> {
        self.total = self.total.checked_add(expense.amount()).ok_or_else(|| {
            ExpenseError::validation("amount", "ledger total would exceed the largest supported amount")
        })?;
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of every expense amount; zero for an empty ledger
    pub fn total_spent(&self) -> Money {
        self.total
    }

    /// The configured monthly budget, if any
    pub fn budget(&self) -> Option<Money> {
        self.budget
    }

    /// Set the monthly budget. Must be strictly positive.
    pub fn set_budget(&mut self, budget: Money) -> ExpenseResult<()> {
        if !budget.is_positive() {
            return Err(ExpenseError::validation("budget", "must be positive"));
        }
        self.budget = Some(budget);
        Ok(())
    }

    /// Parse and set the monthly budget from user input
    pub fn set_budget_from_str(&mut self, input: &str) -> ExpenseResult<Money> {
        let budget =
            Money::parse(input).map_err(|e| ExpenseError::validation("budget", e.to_string()))?;
        self.set_budget(budget)?;
        Ok(budget)
    }

    /// Compare total spending with the budget
    ///
    /// Fails with [`ExpenseError::BudgetNotSet`] when no budget is configured,
    /// which is distinct from a successful status with negative `remaining`.
    pub fn budget_status(&self) -> ExpenseResult<BudgetStatus> {
        let budget = self.budget.ok_or(ExpenseError::BudgetNotSet)?;
        let spent = self.total_spent();
        Ok(BudgetStatus {
            budget,
            spent,
            remaining: budget - spent,
        })
    }
}
