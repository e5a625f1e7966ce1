//! Month-to-date dashboard summary

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;

use crate::aggregate::{aggregate, top_category, total};
use crate::models::{DashboardSummary, Expense};
use crate::window::month_to_date;

/// Number of payment methods listed on the dashboard
const TOP_PAYMENT_METHODS: usize = 3;

/// Summarize spending in the month containing `now`
pub fn dashboard_summary(expenses: &[Expense], now: NaiveDateTime) -> DashboardSummary {
    let this_month = month_to_date(expenses, now);

    let by_category = aggregate(this_month.iter().copied());
    let top_category = top_category(&by_category).map(str::to_string);

    DashboardSummary {
        total_spent: total(this_month.iter().copied()),
        top_category,
        top_payment_methods: top_payment_methods(&this_month, TOP_PAYMENT_METHODS),
        by_category,
        daily: daily_totals(&this_month),
    }
}

/// Most frequently used payment methods, by record count
///
/// Ties are ordered by label. Records without a method are ignored.
pub fn top_payment_methods(expenses: &[&Expense], limit: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for method in expenses.iter().filter_map(|e| e.payment_method.as_deref()) {
        *counts.entry(method).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(method, _)| method.to_string())
        .collect()
}

/// Spending per calendar day (YYYY-MM-DD); undated records are skipped
pub fn daily_totals(expenses: &[&Expense]) -> BTreeMap<String, f64> {
    let mut daily = BTreeMap::new();
    for expense in expenses {
        if let Some(date) = expense.date {
            *daily
                .entry(date.format("%Y-%m-%d").to_string())
                .or_insert(0.0) += expense.amount;
        }
    }
    daily
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn on(day: u32, hour: u32, category: &str, amount: f64, method: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 5, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0),
            category,
            amount,
        )
        .with_payment_method(method)
    }

    #[test]
    fn test_dashboard_summary() {
        let expenses = vec![
            on(1, 9, "Food", 12.0, "UPI"),
            on(1, 20, "Food", 8.0, "Cash"),
            on(3, 10, "Rent", 500.0, "Credit Card"),
            on(4, 10, "Travel", 40.0, "UPI"),
            Expense::new(
                NaiveDate::from_ymd_opt(2024, 4, 30).unwrap().and_hms_opt(10, 0, 0),
                "Food",
                999.0,
            ),
        ];

        let summary = dashboard_summary(&expenses, now());
        assert_eq!(summary.total_spent, 560.0);
        assert_eq!(summary.top_category.as_deref(), Some("Rent"));
        assert_eq!(summary.top_payment_methods, vec!["UPI", "Cash", "Credit Card"]);
        assert_eq!(summary.by_category["Food"], 20.0);
        assert_eq!(summary.daily.len(), 3);
        assert_eq!(summary.daily["2024-05-01"], 20.0);
        assert!(!summary.daily.contains_key("2024-04-30"));
    }

    #[test]
    fn test_dashboard_empty() {
        let summary = dashboard_summary(&[], now());
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.top_category, None);
        assert!(summary.top_payment_methods.is_empty());
        assert!(summary.by_category.is_empty());
        assert!(summary.daily.is_empty());
    }

    #[test]
    fn test_top_payment_methods_limit_and_ties() {
        let expenses = vec![
            on(2, 9, "Food", 1.0, "Wallet"),
            on(2, 9, "Food", 1.0, "Cash"),
            on(2, 9, "Food", 1.0, "Bank"),
            on(2, 9, "Food", 1.0, "Card"),
            on(2, 9, "Food", 1.0, "Card"),
            Expense::new(None, "Food", 1.0),
        ];
        let refs: Vec<&Expense> = expenses.iter().collect();

        assert_eq!(top_payment_methods(&refs, 3), vec!["Card", "Bank", "Cash"]);
    }
}
