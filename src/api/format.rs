use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::calc::format_brl;

#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub formatted: String,
}

pub async fn get_format(Query(params): Query<FormatQuery>) -> Json<FormatResponse> {
    Json(FormatResponse {
        formatted: format_brl(params.value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_format() {
        let Json(body) = get_format(Query(FormatQuery { value: -500.75 })).await;
        assert_eq!(body.formatted, "R$ -500,75");
    }
}
