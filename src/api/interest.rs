use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::calc::{format_brl, InterestCalculator};
use crate::domain::Decimal;
use crate::error::AppError;

/// Longest schedule the endpoint will produce.
const MAX_SCHEDULE_PERIODS: u32 = 1200;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundRequest {
    pub principal: Decimal,
    /// Rate per period as a fraction (`0.01` is 1%).
    pub rate: Decimal,
    pub periods: u32,
    #[serde(default)]
    pub schedule: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundResponse {
    pub amount: Decimal,
    pub formatted_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<Decimal>>,
}

pub async fn post_compound(
    State(state): State<AppState>,
    Json(request): Json<CompoundRequest>,
) -> Result<Json<CompoundResponse>, AppError> {
    if request.schedule && request.periods > MAX_SCHEDULE_PERIODS {
        return Err(AppError::BadRequest(format!(
            "schedule is limited to {} periods",
            MAX_SCHEDULE_PERIODS
        )));
    }

    let calc = InterestCalculator::new(state.ctx);
    let amount = calc.compound(request.principal, request.rate, request.periods)?;
    let schedule = if request.schedule {
        Some(calc.schedule(request.principal, request.rate, request.periods)?)
    } else {
        None
    };

    Ok(Json(CompoundResponse {
        formatted_amount: format_brl(amount.to_f64()),
        amount,
        schedule,
    }))
}
