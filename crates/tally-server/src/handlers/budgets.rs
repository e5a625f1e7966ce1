//! Budget handlers

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use super::{now, parse_body, NO_EXPENSES_OR_BUDGETS};
use crate::{AppError, AppState};
use tally_core::{budget_status as category_status, BudgetStatus, BudgetStatusRequest};

/// POST /budgets/status - Month-to-date status of one category
pub async fn budget_status(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<BudgetStatus>, AppError> {
    let request = BudgetStatusRequest::from_value(&parse_body(&body))
        .map_err(|e| AppError::from_request(e, NO_EXPENSES_OR_BUDGETS))?;

    Ok(Json(category_status(
        &request.expenses,
        &request.budgets,
        &request.category,
        now(),
        state.config.budgets.warning_ratio,
    )))
}
