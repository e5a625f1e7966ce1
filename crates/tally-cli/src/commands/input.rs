//! Expense and budget files
//!
//! JSON files hold either a bare list of expenses or an object with an
//! `expenses` list and an optional `budgets` list. CSV files hold expenses
//! only.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::debug;

use tally_core::{parse_expenses_csv, Budget, Expense, ExpensesRequest, ReportRequest};

/// Data read from an input file
#[derive(Debug, Default)]
pub struct Input {
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
}

/// Read expenses (and any embedded budgets) from a `.json` or `.csv` file
pub fn load_input(path: &Path) -> Result<Input> {
    let input = match extension(path).as_deref() {
        Some("csv") => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Input {
                expenses: parse_expenses_csv(file)
                    .with_context(|| format!("Failed to parse CSV {}", path.display()))?,
                budgets: vec![],
            }
        }
        Some("json") => parse_input_json(&read_json(path)?)
            .with_context(|| format!("Invalid expense file {}", path.display()))?,
        _ => bail!(
            "Unsupported file type: {} (expected .json or .csv)",
            path.display()
        ),
    };

    debug!(
        file = %path.display(),
        expenses = input.expenses.len(),
        budgets = input.budgets.len(),
        "Loaded input"
    );
    Ok(input)
}

/// Read budgets from a JSON file (a list, or an object with `budgets`)
///
/// A `null` budgets list counts as empty.
pub fn load_budgets(path: &Path) -> Result<Vec<Budget>> {
    let value = read_json(path)?;
    let items = match &value {
        Value::Array(items) => items.as_slice(),
        Value::Object(object) => match object.get("budgets") {
            Some(Value::Array(items)) => items.as_slice(),
            Some(Value::Null) => &[],
            _ => bail!("{} has no budgets list", path.display()),
        },
        _ => bail!("{} must hold a list of budgets", path.display()),
    };
    Ok(items.iter().filter_map(Budget::from_value).collect())
}

/// Convert a parsed JSON document into expenses and budgets
pub fn parse_input_json(value: &Value) -> Result<Input> {
    match value {
        Value::Array(items) => Ok(Input {
            expenses: items.iter().filter_map(Expense::from_value).collect(),
            budgets: vec![],
        }),
        Value::Object(object) if object.contains_key("budgets") => {
            let request = ReportRequest::from_value(value)?;
            Ok(Input {
                expenses: request.expenses,
                budgets: request.budgets,
            })
        }
        _ => Ok(Input {
            expenses: ExpensesRequest::from_value(value)?.expenses,
            budgets: vec![],
        }),
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}
