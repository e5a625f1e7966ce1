//! Tally Core Library
//!
//! Spending analysis for the Tally expense service:
//! - Coercion of loosely typed expense and budget records
//! - Trailing and month-to-date date windows
//! - Per-category aggregation
//! - Suggestion engine (top category, spending spikes)
//! - Budget reports, monthly reports and budget status
//! - Dashboard summary
//! - Configuration loading and CSV expense files
//!
//! Every analysis function is pure: it takes the expenses and, where dates
//! matter, an explicit reference time.

pub mod aggregate;
pub mod coerce;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod import;
pub mod models;
pub mod report;
pub mod request;
pub mod suggestions;
pub mod window;

pub use aggregate::{aggregate, top_category, CategoryTotals};
pub use config::{BudgetConfig, Config, ServerSettings, SuggestionConfig};
pub use dashboard::dashboard_summary;
pub use error::{Error, Result};
pub use import::parse_expenses_csv;
pub use models::{
    Budget, BudgetState, BudgetStatus, DashboardSummary, Expense, MonthlyReport, Report,
};
pub use report::{budget_status, compute_monthly_report, compute_report};
pub use request::{BudgetStatusRequest, ExpensesRequest, ReportRequest};
pub use suggestions::{compute_suggestions, Suggestion, SuggestionEngine};
pub use window::{filter_window, month_to_date};
