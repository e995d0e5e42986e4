//! Session-related types.
//!
//! Types stored in the session to carry the signed-in identity between
//! requests.

use serde::{Deserialize, Serialize};

use parish_core::{Email, Role, UserId};

use super::user::User;

/// Session-stored identity.
///
/// Minimal data stored in the session to identify the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's ID.
    pub id: UserId,
    /// User's display name.
    pub name: Option<String>,
    /// User's email address.
    pub email: Option<Email>,
    /// User's role, checked by the admin gate.
    pub role: Role,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Session keys for identity data.
pub mod keys {
    /// Key for storing the signed-in user.
    pub const CURRENT_USER: &str = "current_user";
}
