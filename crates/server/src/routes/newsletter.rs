//! Newsletter route handlers.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use parish_core::{Email, SubscriptionId, SubscriptionStatus};

use super::Success;
use crate::db::RepositoryError;
use crate::error::{AppError, AppJson, Result};
use crate::middleware::RequireAdmin;
use crate::models::{NewSubscription, NewsletterSubscription};
use crate::state::AppState;

/// POST /api/newsletter/subscribe
///
/// # Errors
///
/// Returns 409 when the email is already subscribed (in any state), 400
/// for an invalid email.
#[instrument(skip_all)]
pub async fn subscribe(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewSubscription>,
) -> Result<Json<Success>> {
    let subscription = NewsletterSubscription {
        id: SubscriptionId::generate(),
        email: payload.email,
        name: payload.name,
        status: SubscriptionStatus::Active,
        subscribed_at: Utc::now(),
        unsubscribed_at: None,
    };

    state
        .db()
        .newsletter()
        .create(&subscription)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                AppError::Conflict("Email already subscribed".to_string())
            }
            other => AppError::from(other),
        })?;

    tracing::info!("newsletter subscription added");
    Ok(Json(Success::OK))
}

/// Unsubscribe payload.
#[derive(Debug, Deserialize)]
pub struct UnsubscribeRequest {
    pub email: Email,
}

/// POST /api/newsletter/unsubscribe
///
/// Idempotent: unknown addresses succeed, so an unsubscribe link keeps
/// working no matter how often it's clicked.
///
/// # Errors
///
/// Returns an error if the update fails.
#[instrument(skip_all)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UnsubscribeRequest>,
) -> Result<Json<Success>> {
    state.db().newsletter().unsubscribe(&payload.email).await?;
    Ok(Json(Success::OK))
}

/// GET /api/newsletter/subscriptions (admin)
///
/// Active subscriptions, most recent first.
///
/// # Errors
///
/// Returns an error if the listing query fails.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<NewsletterSubscription>>> {
    Ok(Json(state.db().newsletter().list_active().await?))
}
