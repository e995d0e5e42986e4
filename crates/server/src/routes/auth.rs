//! Authentication route handlers.
//!
//! The parish site does not issue identities; an external provider does.
//! These routes read the session (`me`), clear it (`logout`), and accept a
//! signed-in identity from the provider (`exchange_session`), which is the
//! only place sessions are minted.

use axum::{Json, extract::State, http::HeaderMap};
use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::Deserialize;
use subtle::ConstantTimeEq;
use tower_sessions::Session;
use tracing::instrument;

use parish_core::{Email, Role, UserId};

use super::{Success, non_empty};
use crate::error::{AppError, AppJson, Result};
use crate::middleware::auth::{clear_current_user, set_current_user};
use crate::middleware::OptionalUser;
use crate::models::{CurrentUser, UserUpsert};
use crate::state::AppState;

/// GET /api/auth/me
///
/// Returns the signed-in user, or `null` for anonymous visitors.
pub async fn me(OptionalUser(user): OptionalUser) -> Json<Option<CurrentUser>> {
    Json(user)
}

/// POST /api/auth/logout
///
/// Clears the session. Succeeds whether or not anyone was signed in.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn logout(session: Session) -> Result<Json<Success>> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;
    Ok(Json(Success::OK))
}

/// Identity payload delivered by the auth provider.
#[derive(Debug, Deserialize)]
pub struct SessionExchange {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<Email>,
    pub login_method: Option<String>,
    pub role: Option<Role>,
    pub last_signed_in: Option<DateTime<Utc>>,
}

/// POST /api/auth/session
///
/// Session exchange: the external identity provider posts a signed-in
/// user here, authenticated by the shared bearer token. The user row is
/// upserted (the configured owner id is promoted to admin) and the
/// session cookie is established.
///
/// # Errors
///
/// Returns 401 if the bearer token is missing or wrong, 503 when storage
/// is not configured.
#[instrument(skip_all)]
pub async fn exchange_session(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    AppJson(payload): AppJson<SessionExchange>,
) -> Result<Json<Success>> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::Unauthorized("Missing exchange token".to_string()))?;
    let expected = state.config().session_exchange_token.expose_secret();
    if !bool::from(token.as_bytes().ct_eq(expected.as_bytes())) {
        return Err(AppError::Unauthorized("Invalid exchange token".to_string()));
    }

    let upsert = UserUpsert {
        id: UserId::new(non_empty("id", &payload.id)?),
        name: payload.name,
        email: payload.email,
        login_method: payload.login_method,
        role: payload.role,
        last_signed_in: payload.last_signed_in,
    };

    let users = state.db().users();
    users
        .upsert(&upsert, state.config().owner_user_id.as_deref())
        .await?;
    let user = users
        .get(&upsert.id)
        .await?
        .ok_or_else(|| AppError::Internal("user missing after upsert".to_string()))?;

    set_current_user(&session, &CurrentUser::from(&user))
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    tracing::info!(user_id = %user.id, role = %user.role, "session established");
    Ok(Json(Success::OK))
}

/// Extract a bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_requires_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
