//! Staff directory route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use tracing::instrument;

use parish_core::StaffId;

use super::{Created, Success, non_empty, non_empty_opt};
use crate::error::{AppJson, Result};
use crate::middleware::RequireAdmin;
use crate::models::{NewStaffMember, StaffMember, StaffUpdate};
use crate::state::AppState;

/// GET /api/staff
///
/// Active staff members in display order.
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StaffMember>>> {
    Ok(Json(state.db().staff().list_active().await?))
}

/// GET /api/staff/{id}
///
/// Returns the staff member (active or not), or `null` when no such id
/// exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<StaffMember>>> {
    Ok(Json(state.db().staff().get_by_id(&StaffId::new(id)).await?))
}

/// POST /api/staff (admin)
///
/// # Errors
///
/// Returns 400 for a blank name or title.
#[instrument(skip_all, fields(admin = %admin.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<NewStaffMember>,
) -> Result<Json<Created>> {
    let now = Utc::now();
    let member = StaffMember {
        id: StaffId::generate(),
        name: non_empty("name", &payload.name)?,
        title: non_empty("title", &payload.title)?,
        bio: payload.bio,
        photo_url: payload.photo_url,
        email: payload.email,
        phone: payload.phone,
        display_order: payload.display_order,
        is_active: payload.is_active,
        created_at: now,
        updated_at: now,
    };
    state.db().staff().create(&member).await?;

    tracing::info!(staff_id = %member.id, "staff member created");
    Ok(Json(Created {
        id: member.id.into_inner(),
    }))
}

/// PATCH /api/staff/{id} (admin)
///
/// # Errors
///
/// Returns 404 for an unknown id, 400 for a blank name or title.
#[instrument(skip_all, fields(staff_id = %id, admin = %admin.id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<StaffUpdate>,
) -> Result<Json<Success>> {
    let mut update = payload;
    update.name = non_empty_opt("name", update.name.take())?;
    update.title = non_empty_opt("title", update.title.take())?;

    state.db().staff().update(&StaffId::new(id), &update).await?;
    Ok(Json(Success::OK))
}

/// DELETE /api/staff/{id} (admin)
///
/// # Errors
///
/// Returns 404 for an unknown id.
#[instrument(skip_all, fields(staff_id = %id, admin = %admin.id))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Success>> {
    state.db().staff().delete(&StaffId::new(id)).await?;
    Ok(Json(Success::OK))
}
