//! Expense file readers
//!
//! CSV files need a header row naming the columns. Recognized headers
//! (case-insensitive): `date`, `category`, `amount` and `payment_method`
//! (or `paymentMethod`, `Payment Method`). Other columns are ignored and missing ones take
//! the usual coerced defaults.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Expense, ExpenseRecord};

/// Column positions resolved from the header row
struct Columns {
    date: Option<usize>,
    category: Option<usize>,
    amount: Option<usize>,
    payment_method: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };
        Self {
            date: find(&["date"]),
            category: find(&["category"]),
            amount: find(&["amount"]),
            payment_method: find(&["payment_method", "paymentmethod", "payment method"]),
        }
    }
}

/// Parse expenses from CSV data
pub fn parse_expenses_csv<R: Read>(reader: R) -> Result<Vec<Expense>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::from_headers(&headers);
    if columns.amount.is_none() && columns.category.is_none() {
        return Err(Error::InvalidData(
            "CSV needs at least a category or amount column".into(),
        ));
    }

    let mut expenses = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let field = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .map(|s| Value::String(s.to_string()))
                .unwrap_or(Value::Null)
        };

        expenses.push(Expense::from(ExpenseRecord {
            date: field(columns.date),
            category: field(columns.category),
            amount: field(columns.amount),
            payment_method: field(columns.payment_method),
        }));
    }

    debug!(count = expenses.len(), "Parsed expenses from CSV");
    Ok(expenses)
}
