//! Church info route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use super::{Success, non_empty};
use crate::error::{AppJson, Result};
use crate::middleware::RequireAdmin;
use crate::models::{ChurchInfo, ChurchInfoUpdate};
use crate::state::AppState;

/// GET /api/church-info
///
/// The public profile, or `null` before the first save.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn show(State(state): State<AppState>) -> Result<Json<Option<ChurchInfo>>> {
    Ok(Json(state.db().church_info().get().await?))
}

/// PUT /api/church-info (admin)
///
/// Replaces the profile wholesale; optional fields left out of the
/// payload are cleared.
///
/// # Errors
///
/// Returns 400 for a blank name.
#[instrument(skip_all, fields(admin = %admin.id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<ChurchInfoUpdate>,
) -> Result<Json<Success>> {
    let mut update = payload;
    update.name = non_empty("name", &update.name)?;

    state.db().church_info().upsert(&update).await?;

    tracing::info!("church profile saved");
    Ok(Json(Success::OK))
}
