//! Data models for Tally

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::{coerce_amount, coerce_date, coerce_label, coerce_optional_label};

/// A single expense record
///
/// Built from untyped input through [`ExpenseRecord`]; see [`crate::coerce`]
/// for the rules applied to each field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ExpenseRecord")]
pub struct Expense {
    /// When the expense happened (offset stripped), `None` if unusable
    pub date: Option<NaiveDateTime>,
    /// Free-text category label, matched exactly
    pub category: String,
    /// Amount spent, zero if the input was malformed
    pub amount: f64,
    /// How the expense was paid (UPI, Cash, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl Expense {
    pub fn new(date: Option<NaiveDateTime>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            payment_method: None,
        }
    }

    /// Set the payment method
    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    /// Build an expense from an arbitrary JSON value
    ///
    /// Returns `None` when the value is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value::<ExpenseRecord>(value.clone())
            .ok()
            .map(Expense::from)
    }
}

/// Raw expense as it arrives over the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default)]
    pub date: Value,
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub amount: Value,
    #[serde(default, alias = "paymentMethod")]
    pub payment_method: Value,
}

impl From<ExpenseRecord> for Expense {
    fn from(record: ExpenseRecord) -> Self {
        Self {
            date: coerce_date(&record.date),
            category: coerce_label(&record.category),
            amount: coerce_amount(&record.amount),
            payment_method: coerce_optional_label(&record.payment_method),
        }
    }
}

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BudgetRecord")]
pub struct Budget {
    /// Category label the limit applies to; `None` if missing in the input
    pub category: Option<String>,
    /// Limit, zero if missing or malformed
    pub limit: f64,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: f64) -> Self {
        Self {
            category: Some(category.into()),
            limit,
        }
    }

    /// Build a budget from an arbitrary JSON value
    ///
    /// Returns `None` when the value is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value::<BudgetRecord>(value.clone())
            .ok()
            .map(Budget::from)
    }
}

/// Raw budget as it arrives over the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetRecord {
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub limit: Value,
}

impl From<BudgetRecord> for Budget {
    fn from(record: BudgetRecord) -> Self {
        Self {
            category: match record.category {
                Value::Null => None,
                ref other => Some(coerce_label(other)),
            },
            limit: coerce_amount(&record.limit),
        }
    }
}

/// Budget report over a set of expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total_spent: f64,
    pub top_category: Option<String>,
    pub overbudget_categories: Vec<String>,
}

impl Report {
    /// The report for an empty expense list
    pub fn empty() -> Self {
        Self {
            total_spent: 0.0,
            top_category: None,
            overbudget_categories: vec![],
        }
    }
}

/// Report restricted to the current calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Month label (YYYY-MM)
    pub month: String,
    #[serde(flatten)]
    pub report: Report,
}

/// Where a category stands against its budget this month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetState {
    /// No budget is configured for the category
    NoBudget,
    /// Spending is below the warning threshold
    Ok,
    /// Spending reached the warning fraction of the limit
    Warning,
    /// Spending reached or passed the limit
    Over,
}

impl BudgetState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetState::NoBudget => "no-budget",
            BudgetState::Ok => "ok",
            BudgetState::Warning => "warning",
            BudgetState::Over => "over",
        }
    }
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BudgetState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no-budget" => Ok(BudgetState::NoBudget),
            "ok" => Ok(BudgetState::Ok),
            "warning" => Ok(BudgetState::Warning),
            "over" => Ok(BudgetState::Over),
            _ => Err(format!("Unknown budget state: {}", s)),
        }
    }
}

/// Month-to-date budget status for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub category: String,
    pub status: BudgetState,
    pub spent: f64,
    /// Configured limit, `None` when there is no budget
    pub limit: Option<f64>,
}

/// Month-to-date dashboard numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_spent: f64,
    pub top_category: Option<String>,
    /// Up to three most used payment methods
    pub top_payment_methods: Vec<String>,
    /// Spending per category
    pub by_category: BTreeMap<String, f64>,
    /// Spending per day (YYYY-MM-DD)
    pub daily: BTreeMap<String, f64>,
}
