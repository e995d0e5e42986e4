//! Event CRUD and the upcoming filter.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{Value, json};

use parish_integration_tests::{TestApp, body_json};

#[tokio::test]
async fn test_create_requires_admin() {
    let app = TestApp::spawn().await;
    let payload = json!({
        "title": "Easter Service",
        "event_date": Utc::now().to_rfc3339(),
    });

    let response = app.post_json("/api/events", &payload).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookie = app.user_session("plain-user").await;
    let response = app.post_json_as(&cookie, "/api/events", &payload).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Admin access required");
}

#[tokio::test]
async fn test_event_crud_roundtrip() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let response = app
        .post_json_as(
            &admin,
            "/api/events",
            &json!({
                "title": "Easter Service",
                "description": "Sunrise service followed by breakfast.",
                "event_date": (Utc::now() + Duration::days(30)).to_rfc3339(),
                "location": "Main Sanctuary",
                "category": "worship",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["id"]
        .as_str()
        .expect("create returned no id")
        .to_string();

    // Publicly readable
    let body = body_json(app.get(&format!("/api/events/{id}")).await).await;
    assert_eq!(body["title"], "Easter Service");
    assert_eq!(body["category"], "worship");
    assert_eq!(body["created_by"], parish_integration_tests::OWNER_ID);

    // Partial update leaves other fields alone
    let response = app
        .patch_json_as(
            &admin,
            &format!("/api/events/{id}"),
            &json!({ "location": "Fellowship Hall" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(app.get(&format!("/api/events/{id}")).await).await;
    assert_eq!(body["location"], "Fellowship Hall");
    assert_eq!(body["title"], "Easter Service");

    // Delete, then the id reads as null
    let response = app.delete_as(&admin, &format!("/api/events/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(app.get(&format!("/api/events/{id}")).await).await;
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_upcoming_excludes_past_events() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    for (title, days) in [("Last Month's Picnic", -30), ("Next Month's Revival", 30)] {
        let response = app
            .post_json_as(
                &admin,
                "/api/events",
                &json!({
                    "title": title,
                    "event_date": (Utc::now() + Duration::days(days)).to_rfc3339(),
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let all = body_json(app.get("/api/events").await).await;
    assert_eq!(all.as_array().expect("list is an array").len(), 2);

    let upcoming = body_json(app.get("/api/events/upcoming").await).await;
    let upcoming = upcoming.as_array().expect("list is an array");
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["title"], "Next Month's Revival");
}

#[tokio::test]
async fn test_blank_title_rejected() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let response = app
        .post_json_as(
            &admin,
            "/api/events",
            &json!({ "title": "   ", "event_date": Utc::now().to_rfc3339() }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "title must not be empty");
}

#[tokio::test]
async fn test_unknown_category_rejected() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let response = app
        .post_json_as(
            &admin,
            "/api/events",
            &json!({
                "title": "Mystery Meeting",
                "event_date": Utc::now().to_rfc3339(),
                "category": "bake-sale",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_event_is_404() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let response = app
        .patch_json_as(&admin, "/api/events/no-such-id", &json!({ "title": "X" }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.delete_as(&admin, "/api/events/no-such-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
