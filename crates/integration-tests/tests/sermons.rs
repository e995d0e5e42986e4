//! Sermon library CRUD.

use axum::http::StatusCode;
use serde_json::json;

use parish_integration_tests::{TestApp, body_json};

#[tokio::test]
async fn test_create_requires_admin() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/api/sermons",
            &json!({
                "title": "Walking in Faith",
                "speaker": "Pastor John",
                "sermon_date": "2025-06-01T10:00:00Z",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sermon_crud_roundtrip() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let response = app
        .post_json_as(
            &admin,
            "/api/sermons",
            &json!({
                "title": "Walking in Faith",
                "speaker": "Pastor John Smith",
                "sermon_date": "2025-06-01T10:00:00Z",
                "scripture": "2 Corinthians 5:7",
                "series": "Faith Foundations",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["id"]
        .as_str()
        .expect("create returned no id")
        .to_string();

    let body = body_json(app.get(&format!("/api/sermons/{id}")).await).await;
    assert_eq!(body["speaker"], "Pastor John Smith");
    assert_eq!(body["scripture"], "2 Corinthians 5:7");

    let response = app
        .patch_json_as(
            &admin,
            &format!("/api/sermons/{id}"),
            &json!({ "video_url": "https://videos.example.com/walking-in-faith" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(app.get(&format!("/api/sermons/{id}")).await).await;
    assert_eq!(
        body["video_url"],
        "https://videos.example.com/walking-in-faith"
    );
    assert_eq!(body["series"], "Faith Foundations");

    let response = app.delete_as(&admin, &format!("/api/sermons/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(app.get("/api/sermons").await).await;
    assert_eq!(list.as_array().expect("list is an array").len(), 0);
}

#[tokio::test]
async fn test_sermons_listed_newest_first() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    for (title, date) in [
        ("January Message", "2025-01-05T10:00:00Z"),
        ("March Message", "2025-03-02T10:00:00Z"),
        ("February Message", "2025-02-02T10:00:00Z"),
    ] {
        let response = app
            .post_json_as(
                &admin,
                "/api/sermons",
                &json!({ "title": title, "speaker": "Pastor John", "sermon_date": date }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let list = body_json(app.get("/api/sermons").await).await;
    let titles: Vec<_> = list
        .as_array()
        .expect("list is an array")
        .iter()
        .map(|s| s["title"].as_str().expect("title is a string"))
        .collect();
    assert_eq!(
        titles,
        ["March Message", "February Message", "January Message"]
    );
}

#[tokio::test]
async fn test_blank_speaker_rejected() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let response = app
        .post_json_as(
            &admin,
            "/api/sermons",
            &json!({
                "title": "Untitled",
                "speaker": "",
                "sermon_date": "2025-06-01T10:00:00Z",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "speaker must not be empty");
}
