//! Weekly service schedule.

use axum::http::StatusCode;
use serde_json::json;

use parish_integration_tests::{TestApp, body_json};

async fn create_service(app: &TestApp, admin: &str, name: &str, day: &str) -> String {
    let response = app
        .post_json_as(
            admin,
            "/api/service-times",
            &json!({ "name": name, "day_of_week": day, "time": "10:00 AM" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"]
        .as_str()
        .expect("create returned no id")
        .to_string()
}

#[tokio::test]
async fn test_create_requires_admin() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/api/service-times",
            &json!({ "name": "Sunday Worship", "day_of_week": "sunday", "time": "10:00 AM" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_new_services_are_listed_active() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    create_service(&app, &admin, "Sunday Worship", "sunday").await;

    let list = body_json(app.get("/api/service-times").await).await;
    let list = list.as_array().expect("list is an array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Sunday Worship");
    assert_eq!(list[0]["day_of_week"], "sunday");
    assert_eq!(list[0]["is_active"], "yes");
}

#[tokio::test]
async fn test_deactivated_service_drops_off_schedule() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let keep = create_service(&app, &admin, "Sunday Worship", "sunday").await;
    let hide = create_service(&app, &admin, "Wednesday Study", "wednesday").await;

    let response = app
        .patch_json_as(
            &admin,
            &format!("/api/service-times/{hide}"),
            &json!({ "is_active": "no" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(app.get("/api/service-times").await).await;
    let list = list.as_array().expect("list is an array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], keep.as_str());

    // Reactivating brings it back
    let response = app
        .patch_json_as(
            &admin,
            &format!("/api/service-times/{hide}"),
            &json!({ "is_active": "yes" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(app.get("/api/service-times").await).await;
    assert_eq!(list.as_array().expect("list is an array").len(), 2);
}

#[tokio::test]
async fn test_delete() {
    let app = TestApp::spawn().await;
    let admin = app.admin_session().await;

    let id = create_service(&app, &admin, "Sunday Worship", "sunday").await;

    let response = app
        .delete_as(&admin, &format!("/api/service-times/{id}"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(app.get("/api/service-times").await).await;
    assert_eq!(list.as_array().expect("list is an array").len(), 0);

    let response = app
        .delete_as(&admin, "/api/service-times/no-such-id")
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
