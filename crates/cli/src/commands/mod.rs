//! CLI command implementations.

pub mod migrate;
pub mod seed;
pub mod user;

use secrecy::SecretString;

/// Read the database URL the same way the server does.
///
/// The CLI refuses to run against unconfigured storage, unlike the server
/// which degrades to empty reads.
fn database_url() -> Result<SecretString, MissingDatabaseUrl> {
    std::env::var("PARISH_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MissingDatabaseUrl)
}

/// Neither `PARISH_DATABASE_URL` nor `DATABASE_URL` is set.
#[derive(Debug, thiserror::Error)]
#[error("Missing environment variable: PARISH_DATABASE_URL (or DATABASE_URL)")]
pub(crate) struct MissingDatabaseUrl;
