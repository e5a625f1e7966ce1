//! Suggestion Engine
//!
//! Turns the last 30 days of expenses into short advisory messages:
//! - **Top category** - proposes a 15% cut on the category with the most spend
//! - **Spending spike** - warns when Travel spend grew against the earlier
//!   part of the window
//!
//! All thresholds come from [`SuggestionConfig`]. The engine never reads the
//! clock; callers pass the reference time.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{aggregate, category_total, top_category};
use crate::config::SuggestionConfig;
use crate::models::Expense;
use crate::window::{before, days_before, filter_window};

/// A single piece of advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// The category with the highest spend should be cut back
    ReduceTopCategory { category: String, percent: u32 },
    /// Spend in a watched category grew sharply
    SpendingSpike {
        category: String,
        current: f64,
        previous: f64,
    },
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::ReduceTopCategory { category, percent } => write!(
                f,
                "You're spending a lot on {}. Try to reduce it by {}%.",
                category, percent
            ),
            Suggestion::SpendingSpike { category, .. } => write!(
                f,
                "Your {} expenses increased a lot this month.",
                category.to_lowercase()
            ),
        }
    }
}

/// Produces suggestions from a list of expenses
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self::with_config(SuggestionConfig::default())
    }

    pub fn with_config(config: SuggestionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Analyze expenses relative to `now`
    ///
    /// Returns the top-category suggestion first, then the spike warning.
    /// Both are absent when no expense falls inside the window.
    pub fn analyze(&self, expenses: &[Expense], now: NaiveDateTime) -> Vec<Suggestion> {
        let window = filter_window(expenses, now, self.config.window_days);
        debug!(
            total = expenses.len(),
            in_window = window.len(),
            window_days = self.config.window_days,
            "Filtered expenses for suggestions"
        );

        if window.is_empty() {
            return vec![];
        }

        let mut suggestions = Vec::with_capacity(2);

        let totals = aggregate(window.iter().copied());
        if let Some(top) = top_category(&totals) {
            suggestions.push(Suggestion::ReduceTopCategory {
                category: top.to_string(),
                percent: self.config.reduction_percent,
            });
        }

        if let Some(spike) = self.spending_spike(&window, now) {
            suggestions.push(spike);
        }

        suggestions
    }

    /// Analyze and render as display strings
    pub fn suggest(&self, expenses: &[Expense], now: NaiveDateTime) -> Vec<String> {
        self.analyze(expenses, now)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Compare spike-category spend in the window against its earlier part
    ///
    /// `previous` only covers records of the window dated before
    /// `now - recent_days`, and `current` covers the whole window, so a
    /// window with no earlier spend flags any positive current spend.
    fn spending_spike(&self, window: &[&Expense], now: NaiveDateTime) -> Option<Suggestion> {
        let category = self.config.spike_category.as_str();
        if !window.iter().any(|e| e.category == category) {
            return None;
        }

        let current = category_total(window.iter().copied(), category);
        // No record can predate a cutoff outside the calendar range
        let previous = days_before(now, self.config.recent_days)
            .map(|cutoff| category_total(before(window.iter().copied(), cutoff), category))
            .unwrap_or(0.0);

        let triggered = current > previous * self.config.spike_ratio;
        debug!(category, current, previous, triggered, "Checked spending spike");

        triggered.then(|| Suggestion::SpendingSpike {
            category: category.to_string(),
            current,
            previous,
        })
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggestions for `expenses` using the default thresholds
pub fn compute_suggestions(expenses: &[Expense], now: NaiveDateTime) -> Vec<String> {
    SuggestionEngine::new().suggest(expenses, now)
}
