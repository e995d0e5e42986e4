//! Service time route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use tracing::instrument;

use parish_core::ServiceTimeId;

use super::{Created, Success, non_empty, non_empty_opt};
use crate::error::{AppJson, Result};
use crate::middleware::RequireAdmin;
use crate::models::{NewServiceTime, ServiceTime, ServiceTimeUpdate};
use crate::state::AppState;

/// GET /api/service-times
///
/// Active service times in the order they were added.
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ServiceTime>>> {
    Ok(Json(state.db().service_times().list_active().await?))
}

/// POST /api/service-times (admin)
///
/// New service times start active.
///
/// # Errors
///
/// Returns 400 for a blank name or time.
#[instrument(skip_all, fields(admin = %admin.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<NewServiceTime>,
) -> Result<Json<Created>> {
    let service_time = ServiceTime {
        id: ServiceTimeId::generate(),
        name: non_empty("name", &payload.name)?,
        day_of_week: payload.day_of_week,
        time: non_empty("time", &payload.time)?,
        description: payload.description,
        is_active: true,
        created_at: Utc::now(),
    };
    state.db().service_times().create(&service_time).await?;

    tracing::info!(service_time_id = %service_time.id, "service time created");
    Ok(Json(Created {
        id: service_time.id.into_inner(),
    }))
}

/// PATCH /api/service-times/{id} (admin)
///
/// Setting `is_active` to "no" hides the entry from the public listing
/// without deleting it.
///
/// # Errors
///
/// Returns 404 for an unknown id, 400 for a blank name or time.
#[instrument(skip_all, fields(service_time_id = %id, admin = %admin.id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<ServiceTimeUpdate>,
) -> Result<Json<Success>> {
    let mut update = payload;
    update.name = non_empty_opt("name", update.name.take())?;
    update.time = non_empty_opt("time", update.time.take())?;

    state
        .db()
        .service_times()
        .update(&ServiceTimeId::new(id), &update)
        .await?;
    Ok(Json(Success::OK))
}

/// DELETE /api/service-times/{id} (admin)
///
/// # Errors
///
/// Returns 404 for an unknown id.
#[instrument(skip_all, fields(service_time_id = %id, admin = %admin.id))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Success>> {
    state
        .db()
        .service_times()
        .delete(&ServiceTimeId::new(id))
        .await?;
    Ok(Json(Success::OK))
}
