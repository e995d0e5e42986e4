//! Newsletter subscribe, unsubscribe, and the admin listing.

use axum::http::StatusCode;
use serde_json::json;

use parish_integration_tests::{TestApp, body_json};

#[tokio::test]
async fn test_subscribe() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/api/newsletter/subscribe",
            &json!({ "email": "reader@example.com", "name": "Avid Reader" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));
}

#[tokio::test]
async fn test_duplicate_subscription_conflicts() {
    let app = TestApp::spawn().await;
    let payload = json!({ "email": "reader@example.com" });

    let response = app.post_json("/api/newsletter/subscribe", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.post_json("/api/newsletter/subscribe", &payload).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(body["error"]["message"], "Email already subscribed");
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/api/newsletter/subscribe", &json!({ "email": "nope" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsubscribe_is_idempotent() {
    let app = TestApp::spawn().await;

    app.post_json(
        "/api/newsletter/subscribe",
        &json!({ "email": "reader@example.com" }),
    )
    .await;

    let payload = json!({ "email": "reader@example.com" });
    let response = app.post_json("/api/newsletter/unsubscribe", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Clicking the link again, or for an address that never subscribed,
    // still succeeds
    let response = app.post_json("/api/newsletter/unsubscribe", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post_json(
            "/api/newsletter/unsubscribe",
            &json!({ "email": "stranger@example.com" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_listing_shows_active_only() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    for email in ["first@example.com", "second@example.com"] {
        app.post_json("/api/newsletter/subscribe", &json!({ "email": email }))
            .await;
    }
    app.post_json(
        "/api/newsletter/unsubscribe",
        &json!({ "email": "first@example.com" }),
    )
    .await;

    let list = body_json(app.get_as(&admin, "/api/newsletter/subscriptions").await).await;
    let list = list.as_array().expect("list is an array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["email"], "second@example.com");
    assert_eq!(list[0]["status"], "active");
}

#[tokio::test]
async fn test_listing_is_admin_only() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/newsletter/subscriptions").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
