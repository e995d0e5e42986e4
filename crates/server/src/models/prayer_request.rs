//! Prayer request domain types.
//!
//! Requests arrive from the public form and start out pending; an admin
//! approves them before they appear on the public prayer wall.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::{Email, PrayerRequestId, PrayerStatus};

/// A prayer request submitted by a visitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerRequest {
    /// Unique request ID.
    pub id: PrayerRequestId,
    /// Name of the person asking for prayer.
    pub name: String,
    /// Contact email, if the visitor left one.
    pub email: Option<Email>,
    /// The request itself.
    pub request: String,
    /// Whether the visitor agreed to public display ("yes"/"no" on the wire).
    #[serde(with = "parish_core::yes_no")]
    pub is_public: bool,
    /// Moderation status.
    pub status: PrayerStatus,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a prayer request.
#[derive(Debug, Deserialize)]
pub struct NewPrayerRequest {
    pub name: String,
    pub email: Option<Email>,
    pub request: String,
    /// Defaults to private when omitted.
    #[serde(default, with = "parish_core::yes_no")]
    pub is_public: bool,
}
