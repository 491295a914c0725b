pub mod balance;
pub mod format;
pub mod health;
pub mod interest;
pub mod stats;

use crate::calc::DecimalContext;
use crate::datasource::EntrySource;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub ctx: DecimalContext,
    pub source: Arc<dyn EntrySource>,
}

impl AppState {
    pub fn new(ctx: DecimalContext, source: Arc<dyn EntrySource>) -> Self {
        Self { ctx, source }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/balance", post(balance::post_balance))
        .route("/v1/demo/summary", get(balance::get_demo_summary))
        .route("/v1/stats", post(stats::post_stats))
        .route("/v1/compound", post(interest::post_compound))
        .route("/v1/format", get(format::get_format))
        .layer(cors)
        .with_state(state)
}
