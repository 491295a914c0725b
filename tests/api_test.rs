use axum::body::Body;
use axum::http::{Request, StatusCode};
use saldo::api::{self, AppState};
use saldo::{Config, CsvEntrySource, DemoDataSource, EntrySource, FallbackSource};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use tower::util::ServiceExt;

fn setup_test_app(source: Arc<dyn EntrySource>) -> axum::Router {
    let ctx = Config::default().decimal_context().unwrap();
    api::create_router(AppState::new(ctx, source))
}

fn demo_app() -> axum::Router {
    setup_test_app(Arc::new(DemoDataSource::new()))
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = send(demo_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ready_endpoint_reports_source() {
    let (status, body) = send(demo_app(), get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["source"], "demo");
    assert_eq!(body["precision"], 20);

    let source = FallbackSource::new(Arc::new(CsvEntrySource::new("/data/entries.csv")));
    let (_, body) = send(setup_test_app(Arc::new(source)), get("/ready")).await;
    assert_eq!(body["source"], "csv");
}

#[tokio::test]
async fn test_balance_endpoint_kind_ignores_case() {
    let request = post_json(
        "/v1/balance",
        json!({
            "entries": [
                {"kind": "SAIDA", "amount": 5},
                {"kind": "Entrada", "amount": 0.1}
            ]
        }),
    );

    let (status, body) = send(demo_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalOutflow"], json!(5.0));
    assert_eq!(body["netBalance"], json!(-4.9));
    assert_eq!(body["formattedBalance"], "R$ -4,90");
    assert_eq!(body["skipped"], 0);
}

#[tokio::test]
async fn test_balance_endpoint() {
    let request = post_json(
        "/v1/balance",
        json!({
            "entries": [
                {"kind": "entrada", "amount": 1500.50, "label": "Salário"},
                {"kind": "saida", "amount": 350.75, "label": "Conta de luz"},
                {"kind": "saida", "amount": 89.90, "label": "Supermercado",
                 "occurredAt": "2024-01-18T12:00:00Z"}
            ]
        }),
    );

    let (status, body) = send(demo_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["netBalance"], json!(1059.85));
    assert_eq!(body["totalInflow"], json!(1500.5));
    assert_eq!(body["totalOutflow"], json!(440.65));
    assert_eq!(body["formattedBalance"], "R$ 1.059,85");
    assert_eq!(body["skipped"], 0);
}

#[tokio::test]
async fn test_balance_endpoint_exact_decimals() {
    let request = post_json(
        "/v1/balance",
        json!({
            "entries": [
                {"kind": "entrada", "amount": 0.1},
                {"kind": "entrada", "amount": 0.2},
                {"kind": "saida", "amount": 0.3},
                {"kind": "estorno", "amount": 10}
            ]
        }),
    );

    let (status, body) = send(demo_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["netBalance"], json!(0.0));
    assert_eq!(body["formattedBalance"], "R$ 0,00");
    assert_eq!(body["skipped"], 1);
}

#[tokio::test]
async fn test_balance_endpoint_accepts_signed_records() {
    let request = post_json(
        "/v1/balance",
        json!({
            "entries": [
                {"kind": "entrada", "amount": 100},
                {"amount": -250.50}
            ]
        }),
    );

    let (status, body) = send(demo_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["netBalance"], json!(-150.5));
    assert_eq!(body["formattedBalance"], "R$ -150,50");
}

#[tokio::test]
async fn test_balance_endpoint_rejects_non_numeric_amount() {
    let request = post_json(
        "/v1/balance",
        json!({"entries": [{"kind": "entrada", "amount": "muito"}]}),
    );

    let (status, _) = send(demo_app(), request).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_stats_endpoint() {
    let request = post_json(
        "/v1/stats",
        json!({
            "transactions": [
                {"amount": -50, "type": "income"},
                {"amount": 1000},
                {"amount": -120.40, "description": "Mercado"}
            ]
        }),
    );

    let (status, body) = send(demo_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["income"], json!(1050.0));
    assert_eq!(body["outcome"], json!(120.4));
    assert_eq!(body["total"], json!(929.6));
    assert_eq!(body["count"], 3);
    assert_eq!(body["formattedTotal"], "R$ 929,60");
}

#[tokio::test]
async fn test_compound_endpoint() {
    let request = post_json(
        "/v1/compound",
        json!({"principal": 1000, "rate": 0.01, "periods": 12, "schedule": true}),
    );

    let (status, body) = send(demo_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], json!(1126.83));
    assert_eq!(body["formattedAmount"], "R$ 1.126,83");
    assert_eq!(body["schedule"].as_array().unwrap().len(), 12);
    assert_eq!(body["schedule"][0], json!(1010.0));
}

#[tokio::test]
async fn test_compound_endpoint_without_schedule() {
    let request = post_json(
        "/v1/compound",
        json!({"principal": 1000, "rate": -0.01, "periods": 12}),
    );

    let (status, body) = send(demo_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], json!(886.38));
    assert!(body.get("schedule").is_none());
}

#[tokio::test]
async fn test_compound_endpoint_rejects_negative_periods() {
    let request = post_json(
        "/v1/compound",
        json!({"principal": 1000, "rate": 0.01, "periods": -1}),
    );

    let (status, _) = send(demo_app(), request).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_compound_endpoint_limits_schedule_length() {
    let request = post_json(
        "/v1/compound",
        json!({"principal": 1000, "rate": 0.01, "periods": 5000, "schedule": true}),
    );

    let (status, body) = send(demo_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("1200"));
}

#[tokio::test]
async fn test_format_endpoint() {
    let (status, body) = send(demo_app(), get("/v1/format?value=1234.56")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["formatted"], "R$ 1.234,56");

    let (status, _) = send(demo_app(), get("/v1/format?value=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_demo_summary_uses_builtin_entries() {
    let (status, body) = send(demo_app(), get("/v1/demo/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["formattedBalance"], "R$ 3.619,45");
}

#[tokio::test]
async fn test_demo_summary_from_csv() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "kind,amount,label,occurred_at").unwrap();
    writeln!(file, "entrada,2000.00,Salário,2024-02-05T09:00:00Z").unwrap();
    writeln!(file, "saida,1234.56,Aluguel,").unwrap();

    let source = FallbackSource::new(Arc::new(CsvEntrySource::new(file.path())));
    let (status, body) = send(setup_test_app(Arc::new(source)), get("/v1/demo/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["netBalance"], json!(765.44));
    assert_eq!(body["formattedBalance"], "R$ 765,44");
}

#[tokio::test]
async fn test_demo_summary_csv_error_without_fallback() {
    let source = CsvEntrySource::new("/nonexistent/saldo.csv");
    let (status, body) = send(setup_test_app(Arc::new(source)), get("/v1/demo/summary")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("IO error"));
}
