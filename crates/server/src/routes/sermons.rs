//! Sermon route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use tracing::instrument;

use parish_core::SermonId;

use super::{Created, Success, non_empty, non_empty_opt};
use crate::error::{AppJson, Result};
use crate::middleware::RequireAdmin;
use crate::models::{NewSermon, Sermon, SermonUpdate};
use crate::state::AppState;

/// GET /api/sermons
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Sermon>>> {
    Ok(Json(state.db().sermons().list().await?))
}

/// GET /api/sermons/{id}
///
/// Returns the sermon, or `null` when no such id exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Sermon>>> {
    Ok(Json(state.db().sermons().get_by_id(&SermonId::new(id)).await?))
}

/// POST /api/sermons (admin)
///
/// # Errors
///
/// Returns 400 for a blank title or speaker.
#[instrument(skip_all, fields(admin = %admin.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<NewSermon>,
) -> Result<Json<Created>> {
    let now = Utc::now();
    let sermon = Sermon {
        id: SermonId::generate(),
        title: non_empty("title", &payload.title)?,
        speaker: non_empty("speaker", &payload.speaker)?,
        description: payload.description,
        sermon_date: payload.sermon_date,
        video_url: payload.video_url,
        audio_url: payload.audio_url,
        thumbnail_url: payload.thumbnail_url,
        scripture: payload.scripture,
        series: payload.series,
        created_at: now,
        updated_at: now,
    };
    state.db().sermons().create(&sermon).await?;

    tracing::info!(sermon_id = %sermon.id, "sermon created");
    Ok(Json(Created {
        id: sermon.id.into_inner(),
    }))
}

/// PATCH /api/sermons/{id} (admin)
///
/// # Errors
///
/// Returns 404 for an unknown id, 400 for a blank title or speaker.
#[instrument(skip_all, fields(sermon_id = %id, admin = %admin.id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<SermonUpdate>,
) -> Result<Json<Success>> {
    let mut update = payload;
    update.title = non_empty_opt("title", update.title.take())?;
    update.speaker = non_empty_opt("speaker", update.speaker.take())?;

    state.db().sermons().update(&SermonId::new(id), &update).await?;
    Ok(Json(Success::OK))
}

/// DELETE /api/sermons/{id} (admin)
///
/// # Errors
///
/// Returns 404 for an unknown id.
#[instrument(skip_all, fields(sermon_id = %id, admin = %admin.id))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Success>> {
    state.db().sermons().delete(&SermonId::new(id)).await?;
    Ok(Json(Success::OK))
}
