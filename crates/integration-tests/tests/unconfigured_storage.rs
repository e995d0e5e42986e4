//! Behavior without a configured database.
//!
//! The server boots with no `PARISH_DATABASE_URL`: the public site stays
//! browsable on empty reads, while anything that must persist fails with
//! an honest 503.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};

use parish_integration_tests::{EXCHANGE_TOKEN, TestApp, body_json};

#[tokio::test]
async fn test_reads_degrade_to_empty() {
    let app = TestApp::spawn_unconfigured().await;

    for uri in ["/api/events", "/api/sermons", "/api/staff", "/api/service-times"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        assert_eq!(body_json(response).await, json!([]), "GET {uri}");
    }

    let response = app.get("/api/church-info").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, Value::Null);

    let response = app.get("/api/events/some-id").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, Value::Null);
}

#[tokio::test]
async fn test_writes_fail_with_503() {
    let app = TestApp::spawn_unconfigured().await;

    let response = app
        .post_json(
            "/api/newsletter/subscribe",
            &json!({ "email": "reader@example.com" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    assert_eq!(body["error"]["message"], "Storage is not configured");

    let response = app
        .post_json(
            "/api/contact",
            &json!({ "name": "V", "email": "v@example.com", "message": "hi" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_session_exchange_unavailable() {
    let app = TestApp::spawn_unconfigured().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/session")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {EXCHANGE_TOKEN}"))
        .body(Body::from(json!({ "id": "someone" }).to_string()))
        .expect("failed to build request");

    let response = app.request(request).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_readiness_reports_degraded_mode() {
    let app = TestApp::spawn_unconfigured().await;

    let response = app.get("/health/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    assert_eq!(&bytes[..], b"no storage configured");
}
