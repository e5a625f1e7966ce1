//! Analysis commands
//!
//! Each command loads its input, runs the matching core analysis against the
//! current UTC time and prints the result as JSON.

use std::path::Path;

use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use serde_json::{json, Value};

use super::input::{load_budgets, load_input, Input};
use super::print_json;
use tally_core::{
    budget_status, compute_monthly_report, compute_report, dashboard_summary, BudgetStatus,
    Config, DashboardSummary, SuggestionEngine,
};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Load an expense file, replacing its budgets when a budget file is given
pub fn load_with_budgets(file: &Path, budgets: Option<&Path>) -> Result<Input> {
    let mut input = load_input(file)?;
    if let Some(path) = budgets {
        input.budgets = load_budgets(path)?;
    }
    Ok(input)
}

/// Suggestions as `{"suggestions": [...]}`
pub fn suggestions_output(config: &Config, input: &Input, now: NaiveDateTime) -> Value {
    let engine = SuggestionEngine::with_config(config.suggestions.clone());
    json!({ "suggestions": engine.suggest(&input.expenses, now) })
}

/// Overall or month-to-date report
pub fn report_output(input: &Input, monthly: bool, now: NaiveDateTime) -> Result<Value> {
    let value = if monthly {
        serde_json::to_value(compute_monthly_report(
            &input.expenses,
            &input.budgets,
            now,
        ))?
    } else {
        serde_json::to_value(compute_report(&input.expenses, &input.budgets))?
    };
    Ok(value)
}

pub fn budget_status_output(
    config: &Config,
    input: &Input,
    category: &str,
    now: NaiveDateTime,
) -> BudgetStatus {
    budget_status(
        &input.expenses,
        &input.budgets,
        category,
        now,
        config.budgets.warning_ratio,
    )
}

pub fn dashboard_output(input: &Input, now: NaiveDateTime) -> DashboardSummary {
    dashboard_summary(&input.expenses, now)
}

pub fn cmd_suggest(config: &Config, file: &Path) -> Result<()> {
    let input = load_input(file)?;
    print_json(&suggestions_output(config, &input, now()))
}

pub fn cmd_report(file: &Path, budgets: Option<&Path>, monthly: bool) -> Result<()> {
    let input = load_with_budgets(file, budgets)?;
    print_json(&report_output(&input, monthly, now())?)
}

pub fn cmd_budget_status(
    config: &Config,
    file: &Path,
    budgets: Option<&Path>,
    category: &str,
) -> Result<()> {
    let input = load_with_budgets(file, budgets)?;
    print_json(&budget_status_output(config, &input, category, now()))
}

pub fn cmd_dashboard(file: &Path) -> Result<()> {
    let input = load_input(file)?;
    print_json(&dashboard_output(&input, now()))
}
