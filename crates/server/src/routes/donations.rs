//! Donation route handlers.
//!
//! Donations record giving intent only; there is no payment gateway.
//! Records start `pending` and an admin reconciles them against the
//! actual ledger.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use parish_core::{DonationId, DonationStatus};

use super::{Created, Success};
use crate::error::{AppJson, Result};
use crate::middleware::{OptionalUser, RequireAdmin};
use crate::models::{Donation, NewDonation};
use crate::state::AppState;

/// POST /api/donations
///
/// Records a donation and notifies the owner. A signed-in donor is linked
/// via `user_id`; everyone else donates as a guest.
///
/// # Errors
///
/// Returns 400 when the amount is not a positive integer.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    AppJson(payload): AppJson<NewDonation>,
) -> Result<Json<Created>> {
    // Anonymous gifts never store donor identity.
    let (donor_name, donor_email) = if payload.is_anonymous {
        (None, None)
    } else {
        (payload.donor_name, payload.donor_email)
    };
    let donation = Donation {
        id: DonationId::generate(),
        amount: payload.amount,
        currency: "USD".to_string(),
        donor_name,
        donor_email,
        purpose: payload.purpose,
        is_anonymous: payload.is_anonymous,
        status: DonationStatus::Pending,
        user_id: user.map(|u| u.id),
        created_at: Utc::now(),
    };
    state.db().donations().create(&donation).await?;

    let from = if donation.is_anonymous {
        "Anonymous"
    } else {
        donation.donor_name.as_deref().unwrap_or("Unknown")
    };
    state.notifier().notify_in_background(
        "New Donation Received",
        format!(
            "Amount: {}\nFrom: {}\nPurpose: {}",
            donation.amount,
            from,
            donation.purpose.as_deref().unwrap_or("General")
        ),
    );

    tracing::info!(donation_id = %donation.id, "donation recorded");
    Ok(Json(Created {
        id: donation.id.into_inner(),
    }))
}

/// GET /api/donations (admin)
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<Donation>>> {
    Ok(Json(state.db().donations().list().await?))
}

/// Requested payment status.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: DonationStatus,
}

/// POST /api/donations/{id}/status (admin)
///
/// # Errors
///
/// Returns 404 for an unknown id.
#[instrument(skip_all, fields(donation_id = %id, admin = %admin.id))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<StatusUpdate>,
) -> Result<Json<Success>> {
    state
        .db()
        .donations()
        .update_status(&DonationId::new(id), payload.status)
        .await?;
    Ok(Json(Success::OK))
}
