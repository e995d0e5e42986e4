//! Parish website API server.
//!
//! This binary serves the JSON API consumed by the parish website frontend
//! on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON under `/api`
//! - `SQLite` for content, submissions, and sessions
//! - Session exchange with the frontend's identity provider
//! - Webhook notifications to the site owner for new submissions
//!
//! The server boots without a database URL: reads return empty results and
//! writes fail with 503 until storage is provisioned.

#![cfg_attr(not(test), forbid(unsafe_code))]

use parish_server::config::Config;
use parish_server::db::Database;
use parish_server::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment (reads .env if present)
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "parish_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the database pool, or run without storage when no URL is set
    let db = match &config.database_url {
        Some(url) => {
            let db = Database::connect(url)
                .await
                .expect("Failed to open database");
            tracing::info!("Database pool created");
            db
        }
        None => {
            tracing::warn!("No database URL configured; reads are empty and writes fail");
            Database::unconfigured()
        }
    };

    // NOTE: Migrations are NOT run automatically on startup.
    // Run them explicitly via: cargo run -p parish-cli -- migrate

    // Build application state
    let state = AppState::new(config.clone(), db);

    // Build router (includes the session layer backed by the same store)
    let app = parish_server::app(state.clone())
        .await
        .expect("Failed to build application router");

    // Start server
    let addr = config.socket_addr();
    tracing::info!("parish server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Let in-flight queries finish before exit
    state.db().close().await;
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
