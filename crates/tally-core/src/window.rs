//! Date windows over expense lists

use chrono::{Datelike, NaiveDateTime, TimeDelta};

use crate::models::Expense;

/// Select expenses dated on or after `reference - days`
///
/// There is no upper bound: expenses dated after `reference` are kept.
/// Expenses without a usable date are treated as too old and dropped.
pub fn filter_window<'a, I>(expenses: I, reference: NaiveDateTime, days: i64) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    match days_before(reference, days) {
        Some(start) => since(expenses, start),
        // Window reaches past the representable range: every dated record is in it
        None => expenses.into_iter().filter(|e| e.date.is_some()).collect(),
    }
}

/// `reference - days`, or `None` when that falls outside the calendar range
pub fn days_before(reference: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    reference.checked_sub_signed(TimeDelta::try_days(days)?)
}

/// Select expenses dated strictly before `cutoff`
pub fn before<'a, I>(expenses: I, cutoff: NaiveDateTime) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| e.date.is_some_and(|d| d < cutoff))
        .collect()
}

/// Select expenses dated in the month of `reference`, from its first day on
pub fn month_to_date<'a, I>(expenses: I, reference: NaiveDateTime) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    since(expenses, month_start(reference))
}

/// Midnight on the first day of `reference`'s month
pub fn month_start(reference: NaiveDateTime) -> NaiveDateTime {
    reference
        .date()
        .with_day(1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(reference)
}

fn since<'a, I>(expenses: I, start: NaiveDateTime) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| e.date.is_some_and(|d| d >= start))
        .collect()
}
