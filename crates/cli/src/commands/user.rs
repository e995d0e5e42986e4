//! User management commands.
//!
//! # Usage
//!
//! ```bash
//! # Promote an existing user to admin
//! parish-cli user promote -i <user-id>
//! ```
//!
//! Users are created by signing in through the site, never by the CLI;
//! promotion only changes the role of an account that already exists.
//! The first admin can also be designated via `PARISH_OWNER_USER_ID`
//! before their first sign-in.

use thiserror::Error;

use parish_core::{Role, UserId};
use parish_server::db::{Database, RepositoryError};

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// Required environment variable is missing.
    #[error(transparent)]
    MissingEnvVar(#[from] super::MissingDatabaseUrl),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No user with the given ID has signed in yet.
    #[error("No user with ID: {0}. Users must sign in once before promotion.")]
    UserNotFound(String),

    /// The role update failed.
    #[error("Update failed: {0}")]
    Update(RepositoryError),
}

/// Promote an existing user to admin.
///
/// # Errors
///
/// Returns `UserError::UserNotFound` if the user has never signed in, or
/// the underlying error if the update fails.
pub async fn promote(id: &str) -> Result<(), UserError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    let user_id = UserId::new(id);
    let user = db
        .users()
        .update_role(&user_id, Role::Admin)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => UserError::UserNotFound(id.to_owned()),
            other => UserError::Update(other),
        })?;

    tracing::info!(
        "User promoted to admin: {} ({})",
        user.name.as_deref().unwrap_or("unnamed"),
        user.id
    );
    Ok(())
}
