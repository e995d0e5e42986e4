//! Session middleware configuration.
//!
//! Sets up cookie sessions using tower-sessions. The store is chosen by
//! the caller: a SQLite-backed store when a database is configured, an
//! in-memory store otherwise.

use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::config::Config;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "parish_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer over the given store.
///
/// # Arguments
///
/// * `store` - Backing session store
/// * `config` - Server configuration (for determining HTTPS mode)
#[must_use]
pub fn create_session_layer<Store: SessionStore>(
    store: Store,
    config: &Config,
) -> SessionManagerLayer<Store> {
    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
