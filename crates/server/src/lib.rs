//! Parish website API server library.
//!
//! This crate provides the server functionality as a library, allowing it
//! to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::trace::TraceLayer;
use tower_sessions::MemoryStore;
use tower_sessions_sqlx_store::SqliteStore;

use crate::state::AppState;

/// Build the application router.
///
/// Sessions persist in SQLite next to the content tables when storage is
/// configured; otherwise they live in memory and die with the process.
///
/// # Errors
///
/// Returns an error if the session table migration fails.
pub async fn app(state: AppState) -> Result<Router, sqlx::Error> {
    let router = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/api", routes::api_router());

    let router = if let Some(pool) = state.db().pool() {
        let store = SqliteStore::new(pool.clone());
        store.migrate().await?;
        router.layer(middleware::create_session_layer(store, state.config()))
    } else {
        let store = MemoryStore::default();
        router.layer(middleware::create_session_layer(store, state.config()))
    };

    Ok(router.layer(TraceLayer::new_for_http()).with_state(state))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Running without configured storage is a legitimate (degraded) state
/// and still reports ready; a configured database that has stopped
/// answering does not.
async fn readiness(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.db().ping().await {
        Ok(true) => (StatusCode::OK, "ok"),
        Ok(false) => (StatusCode::OK, "no storage configured"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "database unreachable"),
    }
}
