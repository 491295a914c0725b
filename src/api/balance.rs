use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::AppState;
use crate::calc::{BalanceCalculator, ConsolidatedResult};
use crate::domain::Entry;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    /// Kinded entries, signed records, or a mix of both.
    pub entries: Vec<Entry>,
}

pub async fn post_balance(
    State(state): State<AppState>,
    Json(request): Json<BalanceRequest>,
) -> Result<Json<ConsolidatedResult>, AppError> {
    let result = BalanceCalculator::new(state.ctx).calculate_entries(&request.entries)?;

    if result.skipped > 0 {
        tracing::debug!(
            skipped = result.skipped,
            total = request.entries.len(),
            "entries with unrecognised kind ignored"
        );
    }

    Ok(Json(result))
}

pub async fn get_demo_summary(
    State(state): State<AppState>,
) -> Result<Json<ConsolidatedResult>, AppError> {
    let entries = state.source.load_entries().await?;
    tracing::debug!(
        source = state.source.name(),
        entries = entries.len(),
        "consolidating summary"
    );

    let result = BalanceCalculator::new(state.ctx).calculate(&entries)?;
    Ok(Json(result))
}
