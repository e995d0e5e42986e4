//! Donation domain types.
//!
//! The donation form records intent only; no payment gateway is involved.
//! Status moves from pending once an admin reconciles the gift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::{Amount, DonationId, DonationStatus, Email, UserId};

/// A recorded donation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    /// Unique donation ID.
    pub id: DonationId,
    /// Donated amount in minor units (cents).
    pub amount: Amount,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Donor's name. Never set for anonymous donations.
    pub donor_name: Option<String>,
    /// Donor's email. Never set for anonymous donations.
    pub donor_email: Option<Email>,
    /// What the gift is for (e.g. "Building Fund").
    pub purpose: Option<String>,
    /// Whether the donor asked to stay anonymous ("yes"/"no" on the wire).
    #[serde(with = "parish_core::yes_no")]
    pub is_anonymous: bool,
    /// Reconciliation status.
    pub status: DonationStatus,
    /// The signed-in user who gave, when known.
    pub user_id: Option<UserId>,
    /// When the donation was recorded.
    pub created_at: DateTime<Utc>,
}

/// Payload for recording a donation.
#[derive(Debug, Deserialize)]
pub struct NewDonation {
    /// Amount in minor units (cents); must be positive.
    pub amount: Amount,
    pub donor_name: Option<String>,
    pub donor_email: Option<Email>,
    pub purpose: Option<String>,
    /// Defaults to a named donation when omitted.
    #[serde(default, with = "parish_core::yes_no")]
    pub is_anonymous: bool,
}
