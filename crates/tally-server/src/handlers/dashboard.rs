//! Dashboard handler

use axum::{body::Bytes, Json};

use super::{now, parse_body, NO_EXPENSES};
use crate::AppError;
use tally_core::{dashboard_summary, DashboardSummary, ExpensesRequest};

/// POST /dashboard - Month-to-date spending summary
pub async fn dashboard(body: Bytes) -> Result<Json<DashboardSummary>, AppError> {
    let request = ExpensesRequest::from_value(&parse_body(&body))
        .map_err(|e| AppError::from_request(e, NO_EXPENSES))?;

    Ok(Json(dashboard_summary(&request.expenses, now())))
}
