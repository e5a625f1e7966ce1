//! Report handlers

use axum::{body::Bytes, Json};

use super::{now, parse_body, NO_EXPENSES_OR_BUDGETS};
use crate::AppError;
use tally_core::{compute_monthly_report, compute_report, MonthlyReport, Report, ReportRequest};

fn parse_report_request(body: &Bytes) -> Result<ReportRequest, AppError> {
    ReportRequest::from_value(&parse_body(body))
        .map_err(|e| AppError::from_request(e, NO_EXPENSES_OR_BUDGETS))
}

/// POST /report - Budget report over every expense in the request
pub async fn report(body: Bytes) -> Result<Json<Report>, AppError> {
    let request = parse_report_request(&body)?;
    Ok(Json(compute_report(&request.expenses, &request.budgets)))
}

/// POST /report/monthly - Budget report for the current month to date
pub async fn monthly_report(body: Bytes) -> Result<Json<MonthlyReport>, AppError> {
    let request = parse_report_request(&body)?;
    Ok(Json(compute_monthly_report(
        &request.expenses,
        &request.budgets,
        now(),
    )))
}
