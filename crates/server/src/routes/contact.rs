//! Contact form route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use parish_core::{ContactMessageId, ContactStatus};

use super::{Created, Success, non_empty};
use crate::error::{AppJson, Result};
use crate::middleware::RequireAdmin;
use crate::models::{ContactMessage, NewContactMessage};
use crate::state::AppState;

/// POST /api/contact
///
/// Records a visitor message (starts `new`) and notifies the owner.
///
/// # Errors
///
/// Returns 400 for a blank name or message, or an invalid email.
#[instrument(skip_all)]
pub async fn send(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewContactMessage>,
) -> Result<Json<Created>> {
    let message = ContactMessage {
        id: ContactMessageId::generate(),
        name: non_empty("name", &payload.name)?,
        email: payload.email,
        phone: payload.phone,
        subject: payload.subject,
        message: non_empty("message", &payload.message)?,
        status: ContactStatus::New,
        created_at: Utc::now(),
    };
    state.db().contact_messages().create(&message).await?;

    state.notifier().notify_in_background(
        "New Contact Message",
        format!(
            "From: {} ({})\nSubject: {}\n\n{}",
            message.name,
            message.email,
            message.subject.as_deref().unwrap_or("N/A"),
            message.message
        ),
    );

    tracing::info!(contact_message_id = %message.id, "contact message received");
    Ok(Json(Created {
        id: message.id.into_inner(),
    }))
}

/// GET /api/contact/messages (admin)
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<ContactMessage>>> {
    Ok(Json(state.db().contact_messages().list().await?))
}

/// Requested triage status.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ContactStatus,
}

/// POST /api/contact/messages/{id}/status (admin)
///
/// Any of new/read/responded may be set directly; the triage workflow is
/// advisory.
///
/// # Errors
///
/// Returns 404 for an unknown id.
#[instrument(skip_all, fields(contact_message_id = %id, admin = %admin.id))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(payload): AppJson<StatusUpdate>,
) -> Result<Json<Success>> {
    state
        .db()
        .contact_messages()
        .update_status(&ContactMessageId::new(id), payload.status)
        .await?;
    Ok(Json(Success::OK))
}
