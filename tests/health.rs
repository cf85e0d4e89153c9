//! Liveness and readiness endpoints.

mod common;

use axum::http::StatusCode;
use common::{StubCatalog, body_json, build_test_app, get};

#[tokio::test]
async fn health_check_returns_ok() {
    let app = build_test_app(StubCatalog::unreachable());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn ready_when_catalogue_answers() {
    let app = build_test_app(StubCatalog::healthy());
    let response = get(app, "/health/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ready");
    assert_eq!(json["catalog"], "reachable");
}

#[tokio::test]
async fn not_ready_when_catalogue_is_down() {
    let app = build_test_app(StubCatalog::unreachable());
    let response = get(app, "/health/ready").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_json(response).await["message"].is_string());
}
