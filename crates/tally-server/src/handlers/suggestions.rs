//! Suggestion handlers

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use tracing::debug;

use super::{now, parse_body, NO_EXPENSES};
use crate::{AppError, AppState};
use tally_core::ExpensesRequest;

/// Response body for suggestions
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// POST /suggestions - Spending suggestions for the last window of expenses
pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let request = ExpensesRequest::from_value(&parse_body(&body))
        .map_err(|e| AppError::from_request(e, NO_EXPENSES))?;

    let suggestions = state.suggestions.suggest(&request.expenses, now());
    debug!(
        expenses = request.expenses.len(),
        suggestions = suggestions.len(),
        "Computed suggestions"
    );

    Ok(Json(SuggestionsResponse { suggestions }))
}
