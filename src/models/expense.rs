//! Expense model
//!
//! A single recorded spending event. The public constructor validates its
//! input, so an `Expense` value always has a real calendar date, a capitalized alphabetic
//! category, a positive amount and a non-empty description.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Human-readable form of the date format, used in prompts and errors
pub const DATE_FORMAT_HINT: &str = "DD-MM-YYYY";

/// A recorded expense. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    date: NaiveDate,
    category: String,
    amount: Money,
    description: String,
}

impl Expense {
    /// Assemble an expense from fields that already passed `parse_date`,
    /// `normalize_category`, `parse_amount` and `validate_description`
    pub(crate) fn from_validated(
        date: NaiveDate,
        category: String,
        amount: Money,
        description: String,
    ) -> Self {
        Self {
            date,
            category,
            amount,
            description,
        }
    }

    /// Create an expense from raw text fields, as typed by a user or read from disk
    ///
    /// Fields are validated in column order, so the first offending field is the
    /// one reported.
    pub fn parse(date: &str, category: &str, amount: &str, description: &str) -> ExpenseResult<Self> {
        let date = parse_date(date)?;
        let category = normalize_category(category)?;
        let amount = parse_amount(amount)?;
        let description = validate_description(description)?;

        Ok(Self {
            date,
            category,
            amount,
            description,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            format_date(self.date),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Parse a `DD-MM-YYYY` date, rejecting impossible calendar days such as 31-02
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    let s = input.trim();
    let bytes = s.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

    if !well_formed {
        return Err(ExpenseError::validation(
            "date",
            format!("'{}' does not match {}", s, DATE_FORMAT_HINT),
        ));
    }

    let number = |range: std::ops::Range<usize>| {
        s[range]
            .parse::<u32>()
            .map_err(|_| ExpenseError::validation("date", format!("'{}' is malformed", s)))
    };
    let day = number(0..2)?;
    let month = number(3..5)?;
    let year = number(6..10)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        ExpenseError::validation("date", format!("'{}' is not a real calendar date", s))
    })
}

/// Format a date as `DD-MM-YYYY`
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

/// Validate a category label and capitalize it ("food" becomes "Food")
pub fn normalize_category(input: &str) -> ExpenseResult<String> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ExpenseError::validation("category", "cannot be empty"));
    }
    if !s.chars().all(char::is_alphabetic) {
        return Err(ExpenseError::validation(
            "category",
            format!("'{}' must contain only letters", s),
        ));
    }

    let mut chars = s.chars();
    let mut normalized = String::with_capacity(s.len());
    if let Some(first) = chars.next() {
        normalized.extend(first.to_uppercase());
    }
    for c in chars {
        normalized.extend(c.to_lowercase());
    }
    Ok(normalized)
}

/// Parse a positive decimal amount
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    let amount =
        Money::parse(input).map_err(|e| ExpenseError::validation("amount", e.to_string()))?;
    validate_amount(amount)
}

fn validate_amount(amount: Money) -> ExpenseResult<Money> {
    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(ExpenseError::validation("amount", "must be positive"))
    }
}

/// Validate a free-text description, trimming surrounding whitespace
pub fn validate_description(input: &str) -> ExpenseResult<String> {
    let s = input.trim();
    if s.is_empty() {
        Err(ExpenseError::validation("description", "cannot be empty"))
    } else {
        Ok(s.to_string())
    }
}
