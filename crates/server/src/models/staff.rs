//! Staff member domain types.
//!
//! Unlike the other visibility flags, `is_active` here is a plain JSON
//! boolean; only the form-facing records use the "yes"/"no" wire strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::{Email, StaffId};

/// A pastor or staff member shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique staff ID.
    pub id: StaffId,
    /// Full name.
    pub name: String,
    /// Role title (e.g. "Senior Pastor").
    pub title: String,
    /// Short biography.
    pub bio: Option<String>,
    /// Portrait photo URL.
    pub photo_url: Option<String>,
    /// Contact email, if published.
    pub email: Option<Email>,
    /// Contact phone, if published.
    pub phone: Option<String>,
    /// Sort position on the staff page, ascending.
    pub display_order: i64,
    /// Whether the member is currently listed.
    pub is_active: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Payload for adding a staff member.
#[derive(Debug, Deserialize)]
pub struct NewStaffMember {
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<Email>,
    pub phone: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Partial update for a staff member. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<Email>,
    pub phone: Option<String>,
    pub display_order: Option<i64>,
    pub is_active: Option<bool>,
}

const fn default_is_active() -> bool {
    true
}
