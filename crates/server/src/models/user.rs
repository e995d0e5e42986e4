//! User domain types.
//!
//! Users are created by the identity provider through the session-exchange
//! endpoint; this service never issues credentials itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::{Email, Role, UserId};

/// A signed-in user known to the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, assigned by the identity provider.
    pub id: UserId,
    /// Display name, if the provider shared one.
    pub name: Option<String>,
    /// Email address, if the provider shared one.
    pub email: Option<Email>,
    /// How the user signed in (e.g. "google", "email").
    pub login_method: Option<String>,
    /// Authorization role. The configured owner is promoted to admin.
    pub role: Role,
    /// When the user first signed in here.
    pub created_at: DateTime<Utc>,
    /// Most recent sign-in.
    pub last_signed_in: DateTime<Utc>,
}

/// Partial user record applied by an upsert.
///
/// Only the fields that are `Some` are written. An upsert carrying nothing
/// but the id still refreshes `last_signed_in`, so repeat sign-ins leave a
/// trace.
#[derive(Debug, Clone)]
pub struct UserUpsert {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<Email>,
    pub login_method: Option<String>,
    /// Explicit role override. When `None`, the repository decides: the
    /// configured owner id is promoted to admin, everyone else keeps their
    /// current role (or gets the default on first insert).
    pub role: Option<Role>,
    pub last_signed_in: Option<DateTime<Utc>>,
}
