//! Request envelopes
//!
//! Transport layers hand the core a parsed JSON document. These types check
//! the top-level keys and convert each record, reporting a missing key as
//! [`Error::MissingField`] so it can be mapped to a client error.
//!
//! A key holding `null` counts as an empty list. Entries that are not
//! objects are skipped.

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, Result};
use crate::models::{Budget, Expense};

/// Payload for suggestions and the dashboard: `{"expenses": [...]}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensesRequest {
    pub expenses: Vec<Expense>,
}

impl ExpensesRequest {
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = as_object(value, "expenses")?;
        Ok(Self {
            expenses: expenses_field(object)?,
        })
    }
}

/// Payload for reports: `{"expenses": [...], "budgets": [...]}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRequest {
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
}

impl ReportRequest {
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = as_object(value, "expenses")?;
        require(object, "expenses")?;
        require(object, "budgets")?;
        Ok(Self {
            expenses: expenses_field(object)?,
            budgets: budgets_field(object)?,
        })
    }
}

/// Payload for budget status: `{"expenses": [...], "budgets": [...], "category": "..."}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetStatusRequest {
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
    pub category: String,
}

impl BudgetStatusRequest {
    pub fn from_value(value: &Value) -> Result<Self> {
        let report = ReportRequest::from_value(value)?;
        let object = as_object(value, "category")?;
        let category = match require(object, "category")? {
            Value::String(s) => s.clone(),
            _ => return Err(Error::InvalidData("category must be a string".into())),
        };
        Ok(Self {
            expenses: report.expenses,
            budgets: report.budgets,
            category,
        })
    }
}

fn as_object<'a>(value: &'a Value, first_key: &'static str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or(Error::MissingField(first_key))
}

fn require<'a>(object: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value> {
    object.get(key).ok_or(Error::MissingField(key))
}

fn list_field<'a>(object: &'a Map<String, Value>, key: &'static str) -> Result<&'a [Value]> {
    match require(object, key)? {
        Value::Array(items) => Ok(items.as_slice()),
        Value::Null => Ok(&[]),
        _ => Err(Error::InvalidData(format!("{} must be a list", key))),
    }
}

fn expenses_field(object: &Map<String, Value>) -> Result<Vec<Expense>> {
    let items = list_field(object, "expenses")?;
    let expenses: Vec<Expense> = items.iter().filter_map(Expense::from_value).collect();
    if expenses.len() != items.len() {
        warn!(
            skipped = items.len() - expenses.len(),
            "Skipped expense entries that are not objects"
        );
    }
    Ok(expenses)
}

fn budgets_field(object: &Map<String, Value>) -> Result<Vec<Budget>> {
    let items = list_field(object, "budgets")?;
    let budgets: Vec<Budget> = items.iter().filter_map(Budget::from_value).collect();
    if budgets.len() != items.len() {
        warn!(
            skipped = items.len() - budgets.len(),
            "Skipped budget entries that are not objects"
        );
    }
    Ok(budgets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expenses_request() {
        let request = ExpensesRequest::from_value(&json!({
            "expenses": [
                {"date": "2024-01-01", "category": "Food", "amount": 5},
                "garbage",
                {"category": "Rent", "amount": "x"}
            ]
        }))
        .unwrap();

        assert_eq!(request.expenses.len(), 2);
        assert_eq!(request.expenses[1].amount, 0.0);
    }

    #[test]
    fn test_missing_expenses_key() {
        let err = ExpensesRequest::from_value(&json!({"items": []})).unwrap_err();
        assert!(matches!(err, Error::MissingField("expenses")));
        assert!(err.is_client_error());

        let err = ExpensesRequest::from_value(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::MissingField("expenses")));
    }

    #[test]
    fn test_null_expenses_is_empty() {
        let request = ExpensesRequest::from_value(&json!({"expenses": null})).unwrap();
        assert!(request.expenses.is_empty());
    }

    #[test]
    fn test_expenses_wrong_type() {
        let err = ExpensesRequest::from_value(&json!({"expenses": 5})).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_report_request_requires_both_keys() {
        let err = ReportRequest::from_value(&json!({"expenses": []})).unwrap_err();
        assert!(matches!(err, Error::MissingField("budgets")));

        let err = ReportRequest::from_value(&json!({"budgets": []})).unwrap_err();
        assert!(matches!(err, Error::MissingField("expenses")));

        let request = ReportRequest::from_value(&json!({
            "expenses": [{"category": "Food", "amount": 3}],
            "budgets": [{"category": "Food", "limit": 2}, 7]
        }))
        .unwrap();
        assert_eq!(request.expenses.len(), 1);
        assert_eq!(request.budgets, vec![Budget::new("Food", 2.0)]);
    }

    #[test]
    fn test_budget_status_request() {
        let request = BudgetStatusRequest::from_value(&json!({
            "expenses": [],
            "budgets": [],
            "category": "Food"
        }))
        .unwrap();
        assert_eq!(request.category, "Food");

        let err = BudgetStatusRequest::from_value(&json!({"expenses": [], "budgets": []}))
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("category")));

        let err = BudgetStatusRequest::from_value(&json!({
            "expenses": [], "budgets": [], "category": 3
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
