//! CSV codec for the expense table
//!
//! Pure conversions between CSV text and expenses. The file has a fixed header
//! `date,category,amount,description`; dates are written as `DD-MM-YYYY` and
//! amounts with exactly two decimals.
//!
//! Reading is lenient: a row that is short, has a column missing from the
//! header, or fails validation is skipped instead of failing the whole read.
//! Each skipped row is reported through a callback as a [`DroppedRow`].

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::error::ExpenseResult;
use crate::models::{format_date, Expense};

/// Column names, in the order they are written
pub const HEADER: [&str; 4] = ["date", "category", "amount", "description"];

/// A record that was skipped while reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    /// 1-based line number in the source, when known
    pub line: Option<u64>,
    /// Why the row was skipped
    pub reason: String,
}

/// Outcome of a lenient read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Rows that parsed and validated, in file order
    pub expenses: Vec<Expense>,
    /// Rows that were skipped
    pub dropped: Vec<DroppedRow>,
}

/// Positions of the required columns within the header
struct ColumnMapping {
    date: Option<usize>,
    category: Option<usize>,
    amount: Option<usize>,
    description: Option<usize>,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        Self {
            date: find("date"),
            category: find("category"),
            amount: find("amount"),
            description: find("description"),
        }
    }

    fn field<'r>(
        record: &'r StringRecord,
        column: Option<usize>,
        name: &str,
    ) -> Result<&'r str, String> {
        column
            .and_then(|idx| record.get(idx))
            .ok_or_else(|| format!("missing {} column", name))
    }

    fn parse_record(&self, record: &StringRecord) -> Result<Expense, String> {
        let date = Self::field(record, self.date, "date")?;
        let category = Self::field(record, self.category, "category")?;
        let amount = Self::field(record, self.amount, "amount")?;
        let description = Self::field(record, self.description, "description")?;

        Expense::parse(date, category, amount, description).map_err(|e| e.to_string())
    }
}

/// Read expenses, calling `on_drop` for every skipped row
///
/// Only errors from the underlying reader are returned; malformed content
/// never fails the read.
pub fn decode_expenses<R, F>(reader: R, mut on_drop: F) -> ExpenseResult<Vec<Expense>>
where
    R: Read,
    F: FnMut(DroppedRow),
{
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) if e.is_io_error() => return Err(e.into()),
        Err(e) => {
            on_drop(DroppedRow {
                line: e.position().map(|p| p.line()),
                reason: format!("unreadable header: {}", e),
            });
            return Ok(Vec::new());
        }
    };
    let mapping = ColumnMapping::from_headers(&headers);

    let mut expenses = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                on_drop(DroppedRow {
                    line: e.position().map(|p| p.line()),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match mapping.parse_record(&record) {
            Ok(expense) => expenses.push(expense),
            Err(reason) => on_drop(DroppedRow {
                line: record.position().map(|p| p.line()),
                reason,
            }),
        }
    }

    Ok(expenses)
}

/// Read expenses, collecting skipped rows into the report
pub fn decode_lenient<R: Read>(reader: R) -> ExpenseResult<DecodeReport> {
    let mut dropped = Vec::new();
    let expenses = decode_expenses(reader, |row| dropped.push(row))?;
    Ok(DecodeReport { expenses, dropped })
}

/// Write the header and every expense, in order
pub fn encode_expenses<W: Write>(writer: W, expenses: &[Expense]) -> ExpenseResult<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);

    writer.write_record(HEADER)?;
    for expense in expenses {
        writer.write_record([
            format_date(expense.date()).as_str(),
            expense.category(),
            expense.amount().to_string().as_str(),
            expense.description(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
