//! Event route handlers.
//!
//! Listing and reading events is public; creating, updating, and deleting
//! them is admin-only.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use tracing::instrument;

use parish_core::EventId;

use super::{Created, Success, non_empty, non_empty_opt};
use crate::error::{AppJson, Result};
use crate::middleware::RequireAdmin;
use crate::models::{Event, EventUpdate, NewEvent};
use crate::state::AppState;

/// GET /api/events
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Event>>> {
    Ok(Json(state.db().events().list().await?))
}

/// GET /api/events/upcoming
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn upcoming(State(state): State<AppState>) -> Result<Json<Vec<Event>>> {
    Ok(Json(state.db().events().list_upcoming().await?))
}

/// GET /api/events/{id}
///
/// Returns the event, or `null` when no such id exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Event>>> {
    Ok(Json(state.db().events().get_by_id(&EventId::new(id)).await?))
}

/// POST /api/events (admin)
///
/// # Errors
///
/// Returns 400 for a blank title, 401/403 without an admin session.
#[instrument(skip_all, fields(admin = %admin.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<NewEvent>,
) -> Result<Json<Created>> {
    let now = Utc::now();
    let event = Event {
        id: EventId::generate(),
        title: non_empty("title", &payload.title)?,
        description: payload.description,
        event_date: payload.event_date,
        end_date: payload.end_date,
        location: payload.location,
        image_url: payload.image_url,
        category: payload.category,
        created_by: admin.id,
        created_at: now,
        updated_at: now,
    };
    state.db().events().create(&event).await?;

    tracing::info!(event_id = %event.id, "event created");
    Ok(Json(Created {
        id: event.id.into_inner(),
    }))
}

/// PATCH /api/events/{id} (admin)
///
/// # Errors
///
/// Returns 404 for an unknown id, 400 for a blank title.
#[instrument(skip_all, fields(event_id = %id, admin = %admin.id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<EventUpdate>,
) -> Result<Json<Success>> {
    let mut update = payload;
    update.title = non_empty_opt("title", update.title.take())?;

    state.db().events().update(&EventId::new(id), &update).await?;
    Ok(Json(Success::OK))
}

/// DELETE /api/events/{id} (admin)
///
/// # Errors
///
/// Returns 404 for an unknown id.
#[instrument(skip_all, fields(event_id = %id, admin = %admin.id))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Success>> {
    state.db().events().delete(&EventId::new(id)).await?;
    Ok(Json(Success::OK))
}
