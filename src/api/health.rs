use axum::{extract::State, Json};

use super::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Reports which entry source backs the demo summary and the decimal
/// precision every calculator runs with.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ready",
        "source": state.source.name(),
        "precision": state.ctx.precision(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{DecimalContext, RoundingMode};
    use crate::datasource::DemoDataSource;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_ready_reports_source_and_precision() {
        let ctx = DecimalContext::new(12, RoundingMode::HalfUp).unwrap();
        let state = AppState::new(ctx, Arc::new(DemoDataSource::new()));
        let Json(body) = ready(State(state)).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["source"], "demo");
        assert_eq!(body["precision"], 12);
    }
}
