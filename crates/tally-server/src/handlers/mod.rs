//! HTTP request handlers organized by domain
//!
//! Handlers read the raw body themselves so that an empty or malformed body
//! gets the same 400 as a body missing its keys.

pub mod budgets;
pub mod dashboard;
pub mod health;
pub mod reports;
pub mod suggestions;

// Re-export all handlers for use in router
pub use budgets::*;
pub use dashboard::*;
pub use health::*;
pub use reports::*;
pub use suggestions::*;

use axum::body::Bytes;
use chrono::{NaiveDateTime, Utc};
use serde_json::Value;
use tracing::debug;

pub(crate) const NO_EXPENSES: &str = "No expense data provided.";
pub(crate) const NO_EXPENSES_OR_BUDGETS: &str = "No expense or budget data provided.";

/// Reference time for an analysis request (UTC wall clock)
pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Parse a request body, treating anything that is not JSON as `null`
pub(crate) fn parse_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        debug!(error = %e, bytes = body.len(), "Request body is not JSON");
        Value::Null
    })
}
