//! Integration test harness for the parish site API.
//!
//! Each test spawns the full router against a private temp-file `SQLite`
//! database and drives it in-process with `tower::ServiceExt::oneshot`,
//! so the suite needs no running server and tests never share state.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p parish-integration-tests
//! ```
//!
//! # Sessions
//!
//! Admin endpoints are exercised the way production reaches them: a
//! session-exchange request mints the session cookie, and the helpers
//! replay that cookie on subsequent requests. [`TestApp::admin_session`]
//! exchanges the configured owner id, which the upsert promotes to admin.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use parish_server::config::Config;
use parish_server::db::{Database, MIGRATOR};
use parish_server::state::AppState;

/// Bearer token the harness configures for the session-exchange endpoint.
pub const EXCHANGE_TOKEN: &str = "it-exchange-4fQ9zR2vM8wX6yB3nC7dK5gH1jL0pS";

/// User id configured as the site owner; exchanging it yields an admin.
pub const OWNER_ID: &str = "owner-user-1";

/// A fully wired application over a throwaway database.
pub struct TestApp {
    pub app: Router,
    db_path: Option<PathBuf>,
}

impl TestApp {
    /// Spawn the app against a fresh, migrated temp-file database.
    ///
    /// # Panics
    ///
    /// Panics if the database cannot be created or the router fails to
    /// build; there is no meaningful recovery in a test.
    pub async fn spawn() -> Self {
        let db_path =
            std::env::temp_dir().join(format!("parish-it-{}.sqlite", Uuid::new_v4()));
        let url = SecretString::from(format!("sqlite://{}", db_path.display()));
        let db = Database::connect(&url)
            .await
            .expect("failed to open test database");
        let pool = db.pool().expect("test database has a pool");
        MIGRATOR.run(pool).await.expect("failed to run migrations");

        let state = AppState::new(test_config(), db);
        let app = parish_server::app(state)
            .await
            .expect("failed to build router");

        Self {
            app,
            db_path: Some(db_path),
        }
    }

    /// Spawn the app with no storage configured.
    ///
    /// Reads degrade to empty results and writes fail with 503; sessions
    /// fall back to the in-memory store.
    ///
    /// # Panics
    ///
    /// Panics if the router fails to build.
    pub async fn spawn_unconfigured() -> Self {
        let state = AppState::new(test_config(), Database::unconfigured());
        let app = parish_server::app(state)
            .await
            .expect("failed to build router");

        Self { app, db_path: None }
    }

    /// Send a request through the router.
    ///
    /// # Panics
    ///
    /// Panics if the service call itself fails (infallible in axum).
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("request failed")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send("GET", uri, None, None).await
    }

    pub async fn get_as(&self, cookie: &str, uri: &str) -> Response<Body> {
        self.send("GET", uri, Some(cookie), None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response<Body> {
        self.send("POST", uri, None, Some(body)).await
    }

    pub async fn post_json_as(&self, cookie: &str, uri: &str, body: &Value) -> Response<Body> {
        self.send("POST", uri, Some(cookie), Some(body)).await
    }

    pub async fn post_as(&self, cookie: &str, uri: &str) -> Response<Body> {
        self.send("POST", uri, Some(cookie), None).await
    }

    pub async fn patch_json_as(&self, cookie: &str, uri: &str, body: &Value) -> Response<Body> {
        self.send("PATCH", uri, Some(cookie), Some(body)).await
    }

    pub async fn put_json_as(&self, cookie: &str, uri: &str, body: &Value) -> Response<Body> {
        self.send("PUT", uri, Some(cookie), Some(body)).await
    }

    pub async fn delete_as(&self, cookie: &str, uri: &str) -> Response<Body> {
        self.send("DELETE", uri, Some(cookie), None).await
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        body: Option<&Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        self.request(request).await
    }

    /// Exchange an identity for a session cookie, as the provider would.
    ///
    /// # Panics
    ///
    /// Panics if the exchange fails or no cookie comes back.
    pub async fn exchange_session(&self, identity: &Value) -> String {
        let request = Request::builder()
            .method("POST")
            .uri("/api/auth/session")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {EXCHANGE_TOKEN}"))
            .body(Body::from(identity.to_string()))
            .expect("failed to build request");

        let response = self.request(request).await;
        assert!(
            response.status().is_success(),
            "session exchange failed with {}",
            response.status()
        );
        session_cookie(&response)
    }

    /// Session cookie for the configured owner, who holds the admin role.
    pub async fn admin_session(&self) -> String {
        self.exchange_session(&json!({
            "id": OWNER_ID,
            "name": "Site Owner",
            "email": "owner@example.com",
            "login_method": "google",
        }))
        .await
    }

    /// Session cookie for an ordinary (non-admin) user.
    pub async fn user_session(&self, id: &str) -> String {
        self.exchange_session(&json!({
            "id": id,
            "name": "Regular Visitor",
            "email": format!("{id}@example.com"),
        }))
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        // WAL leaves sidecar files next to the database
        if let Some(path) = &self.db_path {
            let _ = std::fs::remove_file(path);
            let _ = std::fs::remove_file(path.with_extension("sqlite-wal"));
            let _ = std::fs::remove_file(path.with_extension("sqlite-shm"));
        }
    }
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics if the body is not valid JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

/// Extract the session cookie pair from a response's `Set-Cookie` header.
///
/// # Panics
///
/// Panics if the header is missing or malformed.
#[must_use]
pub fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response set no cookie")
        .to_str()
        .expect("cookie was not valid UTF-8")
        .split(';')
        .next()
        .expect("cookie had no name=value pair")
        .to_string()
}

/// Test configuration: owner promotion on, notifications off.
fn test_config() -> Config {
    Config {
        database_url: None,
        host: "127.0.0.1".parse().expect("valid loopback address"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        session_exchange_token: SecretString::from(EXCHANGE_TOKEN),
        owner_user_id: Some(OWNER_ID.to_string()),
        notify_webhook_url: None,
    }
}
