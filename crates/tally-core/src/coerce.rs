//! Coercion of loosely typed input values
//!
//! Expense payloads come from JSON or CSV written by other tools, so every
//! field may be missing or carry the wrong type. These helpers turn such
//! values into the typed fields of [`Expense`](crate::models::Expense) and
//! [`Budget`](crate::models::Budget) without ever failing:
//!
//! - amounts and limits that are not finite numbers become `0.0`
//! - dates that cannot be parsed become `None`
//! - labels that are not strings are rendered as their JSON text

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Naive timestamp formats, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f", // 2024-01-15T10:30:00.000
    "%Y-%m-%d %H:%M:%S%.f", // 2024-01-15 10:30:00
    "%Y-%m-%dT%H:%M",       // 2024-01-15T10:30
    "%Y-%m-%d %H:%M",       // 2024-01-15 10:30
];

/// Offset-carrying formats not covered by RFC 3339
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z", // 2024-01-15 10:30:00+02:00
    "%Y-%m-%d %H:%M:%S%.f%z",  // 2024-01-15 10:30:00+0200
    "%Y-%m-%dT%H:%M:%S%.f%z",  // 2024-01-15T10:30:00+0200
];

/// Calendar date formats, interpreted as midnight
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // 2024-01-15
    "%m/%d/%Y", // 01/15/2024
    "%Y/%m/%d", // 2024/01/15
];

/// Coerce an amount or limit to a finite number, defaulting to zero
pub fn coerce_amount(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Coerce a date value to a naive timestamp
///
/// Offsets are stripped and the wall-clock time kept, so
/// `2024-01-15T10:00:00+05:00` and `2024-01-15T10:00:00` compare equal.
pub fn coerce_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date(s),
        _ => None,
    }
}

/// Parse a date string in the formats accepted by [`coerce_date`]
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_local());
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Coerce a category label, keeping strings verbatim
///
/// Labels are never trimmed or case-folded. A missing label becomes the
/// empty string so its amount still counts towards totals.
pub fn coerce_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Coerce an optional label; missing, null and empty values become `None`
pub fn coerce_optional_label(value: &Value) -> Option<String> {
    Some(coerce_label(value)).filter(|s| !s.is_empty())
}
