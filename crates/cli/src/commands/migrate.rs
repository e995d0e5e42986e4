//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! parish-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `PARISH_DATABASE_URL` - `SQLite` connection string (falls back to
//!   `DATABASE_URL`)
//!
//! Migrations live in `crates/server/migrations/` and are embedded into
//! the server crate at compile time, so this binary carries them wherever
//! it is deployed.

use parish_server::db::{Database, MIGRATOR};
use thiserror::Error;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Required environment variable is missing.
    #[error(transparent)]
    MissingEnvVar(#[from] super::MissingDatabaseUrl),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run database migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database URL is unset, the database
/// cannot be opened, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    if let Some(pool) = db.pool() {
        MIGRATOR.run(pool).await?;
    }

    tracing::info!("Migrations complete!");
    Ok(())
}
