//! Per-category aggregation

use std::collections::BTreeMap;

use crate::models::Expense;

/// Summed amount per category label, ordered by label
pub type CategoryTotals = BTreeMap<String, f64>;

/// Sum amounts per category
///
/// Labels are compared byte for byte, so `"Food"` and `"food"` stay
/// separate. Empty input gives an empty map.
pub fn aggregate<'a, I>(expenses: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals = CategoryTotals::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Sum of all amounts
pub fn total<'a, I>(expenses: I) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Sum of amounts for one exact category label
pub fn category_total<'a, I>(expenses: I, category: &str) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// Category with the highest total, `None` when there are no categories
///
/// Ties go to the lexicographically smallest label.
pub fn top_category(totals: &CategoryTotals) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (label, &amount) in totals {
        match best {
            Some((_, max)) if amount <= max => {}
            _ => best = Some((label.as_str(), amount)),
        }
    }
    best.map(|(label, _)| label)
}
