//! Prayer wall submission and moderation.

use axum::http::StatusCode;
use serde_json::json;

use parish_integration_tests::{TestApp, body_json};

async fn submit(app: &TestApp, name: &str, is_public: &str) -> String {
    let response = app
        .post_json(
            "/api/prayer-requests",
            &json!({
                "name": name,
                "request": "Please pray for my family.",
                "is_public": is_public,
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"]
        .as_str()
        .expect("create returned no id")
        .to_string()
}

#[tokio::test]
async fn test_submission_needs_no_auth() {
    let app = TestApp::spawn().await;
    submit(&app, "Grace", "yes").await;
}

#[tokio::test]
async fn test_wall_shows_only_approved_public_requests() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let public_id = submit(&app, "Grace", "yes").await;
    submit(&app, "Quiet Request", "no").await;

    // Nothing is approved yet
    let wall = body_json(app.get("/api/prayer-requests").await).await;
    assert_eq!(wall.as_array().expect("list is an array").len(), 0);

    let response = app
        .post_json_as(
            &admin,
            &format!("/api/prayer-requests/{public_id}/status"),
            &json!({ "status": "approved" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let wall = body_json(app.get("/api/prayer-requests").await).await;
    let wall = wall.as_array().expect("list is an array");
    assert_eq!(wall.len(), 1);
    assert_eq!(wall[0]["name"], "Grace");
    assert_eq!(wall[0]["is_public"], "yes");

    // Admins see everything, whatever the state
    let all = body_json(app.get_as(&admin, "/api/prayer-requests/all").await).await;
    assert_eq!(all.as_array().expect("list is an array").len(), 2);
}

#[tokio::test]
async fn test_moderation_requires_admin() {
    let app = TestApp::spawn().await;
    let id = submit(&app, "Grace", "yes").await;

    let response = app.get("/api/prayer-requests/all").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let user = app.user_session("bystander").await;
    let response = app
        .post_json_as(
            &user,
            &format!("/api/prayer-requests/{id}/status"),
            &json!({ "status": "approved" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_moderation_never_moves_backwards() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;
    let id = submit(&app, "Grace", "yes").await;

    let uri = format!("/api/prayer-requests/{id}/status");
    let response = app
        .post_json_as(&admin, &uri, &json!({ "status": "approved" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post_json_as(&admin, &uri, &json!({ "status": "pending" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Cannot change status from approved to pending"
    );

    // Archiving is always allowed, and is final
    let response = app
        .post_json_as(&admin, &uri, &json!({ "status": "archived" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post_json_as(&admin, &uri, &json!({ "status": "approved" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_moderating_unknown_request_is_404() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let response = app
        .post_json_as(
            &admin,
            "/api/prayer-requests/no-such-id/status",
            &json!({ "status": "approved" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Prayer request not found");
}
