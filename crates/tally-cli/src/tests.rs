//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use tally_core::{BudgetState, Config};
use tempfile::TempDir;

use crate::commands::{self, input};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 20)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

// ========== Input Tests ==========

#[test]
fn test_load_json_list() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "expenses.json",
        r#"[{"date": "2024-06-19", "category": "Food", "amount": 12}, 5]"#,
    );

    let input = input::load_input(&path).unwrap();
    assert_eq!(input.expenses.len(), 1);
    assert!(input.budgets.is_empty());
}

#[test]
fn test_load_json_envelope_with_budgets() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "data.JSON",
        &json!({
            "expenses": [{"date": "2024-06-19", "category": "Food", "amount": 100}],
            "budgets": [{"category": "Food", "limit": 80}]
        })
        .to_string(),
    );

    let input = input::load_input(&path).unwrap();
    assert_eq!(input.expenses.len(), 1);
    assert_eq!(input.budgets.len(), 1);
}

#[test]
fn test_load_json_envelope_without_expenses() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "data.json", r#"{"items": []}"#);

    let err = input::load_input(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("expenses"));
}

#[test]
fn test_load_csv() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "expenses.csv",
        "date,category,amount,payment_method\n2024-06-01,Food,10,UPI\n2024-06-02,Rent,abc,Cash\n",
    );

    let input = input::load_input(&path).unwrap();
    assert_eq!(input.expenses.len(), 2);
    assert_eq!(input.expenses[1].amount, 0.0);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "expenses.txt", "Food,1");

    assert!(input::load_input(&path).is_err());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(input::load_input(&dir.path().join("nope.json")).is_err());
}

#[test]
fn test_budget_file_overrides_embedded() {
    let dir = TempDir::new().unwrap();
    let expenses = write_file(
        &dir,
        "data.json",
        &json!({
            "expenses": [{"category": "Food", "amount": 100}],
            "budgets": [{"category": "Food", "limit": 500}]
        })
        .to_string(),
    );
    let budgets = write_file(
        &dir,
        "budgets.json",
        r#"{"budgets": [{"category": "Food", "limit": 80}]}"#,
    );

    let input = commands::load_with_budgets(&expenses, Some(&budgets)).unwrap();
    assert_eq!(input.budgets, vec![tally_core::Budget::new("Food", 80.0)]);

    let bad = write_file(&dir, "bad.json", r#"{"limits": []}"#);
    assert!(commands::load_with_budgets(&expenses, Some(&bad)).is_err());
}

#[test]
fn test_null_budget_list_is_empty() {
    let dir = TempDir::new().unwrap();
    let expenses = write_file(
        &dir,
        "data.json",
        &json!({
            "expenses": [{"category": "Food", "amount": 100}],
            "budgets": [{"category": "Food", "limit": 50}]
        })
        .to_string(),
    );
    let budgets = write_file(&dir, "budgets.json", r#"{"budgets": null}"#);

    assert!(input::load_budgets(&budgets).unwrap().is_empty());
    let input = commands::load_with_budgets(&expenses, Some(&budgets)).unwrap();
    assert!(input.budgets.is_empty());
}

// ========== Analysis Tests ==========

fn sample_input() -> input::Input {
    input::parse_input_json(&json!({
        "expenses": [
            {"date": "2024-06-19", "category": "Food", "amount": 100, "payment_method": "UPI"},
            {"date": "2024-06-19", "category": "Travel", "amount": 50, "payment_method": "Card"},
            {"date": "2024-05-02", "category": "Rent", "amount": 900}
        ],
        "budgets": [{"category": "Food", "limit": 80}, {"category": "Rent", "limit": 1000}]
    }))
    .unwrap()
}

#[test]
fn test_suggestions_output() {
    let output = commands::suggestions_output(&Config::default(), &sample_input(), now());
    assert_eq!(
        output,
        json!({"suggestions": [
            "You're spending a lot on Food. Try to reduce it by 15%.",
            "Your travel expenses increased a lot this month."
        ]})
    );
}

#[test]
fn test_report_output() {
    let report = commands::report_output(&sample_input(), false, now()).unwrap();
    assert_eq!(report["total_spent"], 1050.0);
    assert_eq!(report["top_category"], "Rent");
    assert_eq!(report["overbudget_categories"], json!(["Food"]));

    let monthly = commands::report_output(&sample_input(), true, now()).unwrap();
    assert_eq!(monthly["month"], "2024-06");
    assert_eq!(monthly["total_spent"], 150.0);
    assert_eq!(monthly["top_category"], "Food");
}

#[test]
fn test_budget_status_output() {
    let status =
        commands::budget_status_output(&Config::default(), &sample_input(), "Food", now());
    assert_eq!(status.status, BudgetState::Over);
    assert_eq!(status.spent, 100.0);

    let status =
        commands::budget_status_output(&Config::default(), &sample_input(), "Rent", now());
    assert_eq!(status.status, BudgetState::Ok);
    assert_eq!(status.spent, 0.0);
}

#[test]
fn test_dashboard_output() {
    let summary = commands::dashboard_output(&sample_input(), now());
    assert_eq!(summary.total_spent, 150.0);
    assert_eq!(summary.top_payment_methods, vec!["Card", "UPI"]);
    assert_eq!(summary.daily["2024-06-19"], 150.0);
}

// ========== Config Tests ==========

#[test]
fn test_config_source_explicit() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "tally.toml", "[budgets]\nwarning_ratio = 0.5\n");

    assert_eq!(
        commands::config_source(Some(&path)),
        path.display().to_string()
    );
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.budgets.warning_ratio, 0.5);
    assert!(commands::cmd_config(&config, Some(&path)).is_ok());
}
