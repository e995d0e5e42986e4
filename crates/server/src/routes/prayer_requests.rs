//! Prayer request route handlers.
//!
//! Anyone may submit a request; the public listing only shows requests
//! that were marked public by the submitter *and* approved by an admin.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use parish_core::{PrayerRequestId, PrayerStatus};

use super::{Created, Success, non_empty};
use crate::error::{AppError, AppJson, Result};
use crate::middleware::RequireAdmin;
use crate::models::{NewPrayerRequest, PrayerRequest};
use crate::state::AppState;

/// GET /api/prayer-requests
///
/// Approved public requests, newest first.
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PrayerRequest>>> {
    Ok(Json(state.db().prayer_requests().list(true).await?))
}

/// GET /api/prayer-requests/all (admin)
///
/// Every request regardless of visibility or status.
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<PrayerRequest>>> {
    Ok(Json(state.db().prayer_requests().list(false).await?))
}

/// POST /api/prayer-requests
///
/// Submits a request (always starts `pending`) and notifies the owner.
///
/// # Errors
///
/// Returns 400 for a blank name or request text.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewPrayerRequest>,
) -> Result<Json<Created>> {
    let prayer = PrayerRequest {
        id: PrayerRequestId::generate(),
        name: non_empty("name", &payload.name)?,
        email: payload.email,
        request: non_empty("request", &payload.request)?,
        is_public: payload.is_public,
        status: PrayerStatus::Pending,
        created_at: Utc::now(),
    };
    state.db().prayer_requests().create(&prayer).await?;

    state.notifier().notify_in_background(
        "New Prayer Request",
        format!("From: {}\n\n{}", prayer.name, prayer.request),
    );

    tracing::info!(prayer_request_id = %prayer.id, "prayer request received");
    Ok(Json(Created {
        id: prayer.id.into_inner(),
    }))
}

/// Requested moderation status.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: PrayerStatus,
}

/// POST /api/prayer-requests/{id}/status (admin)
///
/// Moderation only moves forward: `pending → approved`, anything →
/// `archived`. Writing the current status again is a permitted no-op;
/// nothing ever returns to `pending`.
///
/// # Errors
///
/// Returns 404 for an unknown id, 400 for a disallowed transition.
#[instrument(skip_all, fields(prayer_request_id = %id, admin = %admin.id))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<StatusUpdate>,
) -> Result<Json<Success>> {
    let id = PrayerRequestId::new(id);
    let prayers = state.db().prayer_requests();

    let current = prayers
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Prayer request not found".to_string()))?;

    if !current.status.can_transition_to(payload.status) {
        return Err(AppError::BadRequest(format!(
            "Cannot change status from {} to {}",
            current.status, payload.status
        )));
    }

    prayers.update_status(&id, payload.status).await?;
    Ok(Json(Success::OK))
}
