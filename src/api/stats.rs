use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::calc::{format_brl, StatsAggregator};
use crate::domain::{Decimal, TransactionRecord};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRequest {
    pub transactions: Vec<TransactionRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub income: Decimal,
    pub outcome: Decimal,
    pub total: Decimal,
    pub count: usize,
    pub formatted_total: String,
}

pub async fn post_stats(
    State(state): State<AppState>,
    Json(request): Json<StatsRequest>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = StatsAggregator::new(state.ctx).aggregate(&request.transactions)?;

    Ok(Json(StatsResponse {
        formatted_total: format_brl(stats.total.to_f64()),
        income: stats.income,
        outcome: stats.outcome,
        total: stats.total,
        count: stats.count,
    }))
}
