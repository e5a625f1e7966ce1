//! Report Engine
//!
//! Budget reports over all provided expenses, plus the month-to-date
//! variants used for monthly reports and per-category budget status.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::aggregate::{aggregate, top_category, total};
use crate::models::{Budget, BudgetState, BudgetStatus, Expense, MonthlyReport, Report};
use crate::window::month_to_date;

/// Build a budget report over every expense given (no date filtering)
///
/// A category is over budget when it has expenses and their sum is strictly
/// greater than the limit. Flagged categories keep the order of `budgets`
/// and appear once. Budgets are ignored when there are no expenses.
pub fn compute_report(expenses: &[Expense], budgets: &[Budget]) -> Report {
    report_for(expenses, budgets)
}

/// Budget report for the month containing `now`, labelled `YYYY-MM`
pub fn compute_monthly_report(
    expenses: &[Expense],
    budgets: &[Budget],
    now: NaiveDateTime,
) -> MonthlyReport {
    let this_month = month_to_date(expenses, now);
    MonthlyReport {
        month: now.format("%Y-%m").to_string(),
        report: report_for(this_month, budgets),
    }
}

/// Month-to-date status of one category against its budget
///
/// The first budget whose label matches `category` exactly is used.
/// Spending at or above the limit is `Over`; at or above
/// `warning_ratio * limit` is `Warning`.
pub fn budget_status(
    expenses: &[Expense],
    budgets: &[Budget],
    category: &str,
    now: NaiveDateTime,
    warning_ratio: f64,
) -> BudgetStatus {
    let spent: f64 = month_to_date(expenses, now)
        .into_iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum();

    let limit = budgets
        .iter()
        .find(|b| b.category.as_deref() == Some(category))
        .map(|b| b.limit);

    let status = match limit {
        None => BudgetState::NoBudget,
        Some(limit) if spent >= limit => BudgetState::Over,
        Some(limit) if spent >= warning_ratio * limit => BudgetState::Warning,
        Some(_) => BudgetState::Ok,
    };

    BudgetStatus {
        category: category.to_string(),
        status,
        spent,
        limit,
    }
}

fn report_for<'a, I>(expenses: I, budgets: &[Budget]) -> Report
where
    I: IntoIterator<Item = &'a Expense>,
{
    let expenses: Vec<&Expense> = expenses.into_iter().collect();
    if expenses.is_empty() {
        return Report::empty();
    }

    let total_spent = total(expenses.iter().copied());
    let totals = aggregate(expenses.iter().copied());
    let top_category = top_category(&totals).map(str::to_string);

    let mut overbudget_categories: Vec<String> = Vec::new();
    for budget in budgets {
        let Some(category) = budget.category.as_deref() else {
            debug!("Skipping budget without a category");
            continue;
        };
        let Some(&spent) = totals.get(category) else {
            continue;
        };
        if spent > budget.limit && !overbudget_categories.iter().any(|c| c == category) {
            overbudget_categories.push(category.to_string());
        }
    }

    debug!(
        expenses = expenses.len(),
        budgets = budgets.len(),
        overbudget = overbudget_categories.len(),
        "Built budget report"
    );

    Report {
        total_spent,
        top_category,
        overbudget_categories,
    }
}
