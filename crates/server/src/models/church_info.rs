//! Church profile domain types.
//!
//! The church profile is a logical singleton: one record describing the
//! congregation, shown on the public site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::{ChurchInfoId, Email};

/// The church's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurchInfo {
    /// Record ID.
    pub id: ChurchInfoId,
    /// Church name.
    pub name: String,
    /// Short tagline shown under the name.
    pub tagline: Option<String>,
    /// Longer description or mission statement.
    pub description: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Office phone number.
    pub phone: Option<String>,
    /// Office email address.
    pub email: Option<Email>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Banner image URL.
    pub banner_url: Option<String>,
    /// Facebook page URL.
    pub facebook_url: Option<String>,
    /// Instagram profile URL.
    pub instagram_url: Option<String>,
    /// YouTube channel URL.
    pub youtube_url: Option<String>,
    /// When the profile was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Full replacement payload for the church profile.
///
/// The upsert replaces the singleton's content wholesale: optional fields
/// that are absent are cleared, not preserved.
#[derive(Debug, Deserialize)]
pub struct ChurchInfoUpdate {
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<Email>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
}
