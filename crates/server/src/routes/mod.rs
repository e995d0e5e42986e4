//! HTTP route handlers for the parish API.
//!
//! # Route Structure
//!
//! ```text
//! # Auth
//! GET    /api/auth/me                       - Current user (null when anonymous)
//! POST   /api/auth/logout                   - Clear the session
//! POST   /api/auth/session                  - Session exchange (identity provider only)
//!
//! # Events
//! GET    /api/events                        - All events
//! GET    /api/events/upcoming               - Events that haven't happened yet
//! GET    /api/events/{id}                   - Single event (null on miss)
//! POST   /api/events                        - Create (admin)
//! PATCH  /api/events/{id}                   - Partial update (admin)
//! DELETE /api/events/{id}                   - Delete (admin)
//!
//! # Sermons
//! GET    /api/sermons                       - All sermons
//! GET    /api/sermons/{id}                  - Single sermon (null on miss)
//! POST   /api/sermons                       - Create (admin)
//! PATCH  /api/sermons/{id}                  - Partial update (admin)
//! DELETE /api/sermons/{id}                  - Delete (admin)
//!
//! # Prayer requests
//! GET    /api/prayer-requests               - Approved public requests
//! GET    /api/prayer-requests/all           - Every request (admin)
//! POST   /api/prayer-requests               - Submit; notifies owner
//! POST   /api/prayer-requests/{id}/status   - Moderate (admin)
//!
//! # Contact
//! POST   /api/contact                       - Send a message; notifies owner
//! GET    /api/contact/messages              - All messages (admin)
//! POST   /api/contact/messages/{id}/status  - Triage (admin)
//!
//! # Newsletter
//! POST   /api/newsletter/subscribe          - Subscribe (409 when already subscribed)
//! POST   /api/newsletter/unsubscribe        - Unsubscribe (idempotent)
//! GET    /api/newsletter/subscriptions      - Active subscriptions (admin)
//!
//! # Donations
//! POST   /api/donations                     - Record a donation; notifies owner
//! GET    /api/donations                     - All donations (admin)
//! POST   /api/donations/{id}/status         - Payment status (admin)
//!
//! # Church info
//! GET    /api/church-info                   - Public profile (null until saved)
//! PUT    /api/church-info                   - Replace profile (admin)
//!
//! # Service times
//! GET    /api/service-times                 - Active service times
//! POST   /api/service-times                 - Create (admin)
//! PATCH  /api/service-times/{id}            - Partial update (admin)
//! DELETE /api/service-times/{id}            - Delete (admin)
//!
//! # Staff
//! GET    /api/staff                         - Active staff in display order
//! GET    /api/staff/{id}                    - Single member (null on miss)
//! POST   /api/staff                         - Create (admin)
//! PATCH  /api/staff/{id}                    - Partial update (admin)
//! DELETE /api/staff/{id}                    - Delete (admin)
//! ```

pub mod auth;
pub mod church_info;
pub mod contact;
pub mod donations;
pub mod events;
pub mod newsletter;
pub mod prayer_requests;
pub mod sermons;
pub mod service_times;
pub mod staff;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Body returned by create mutations.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: String,
}

/// Body returned by all other mutations.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    /// The only value this type is ever serialized with.
    pub const OK: Self = Self { success: true };
}

/// Validate that a required string is non-empty once trimmed.
///
/// Returns the trimmed value; surrounding whitespace is never stored.
fn non_empty(field: &'static str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Like [`non_empty`], for optional patch fields: `None` passes through.
fn non_empty_opt(field: &'static str, value: Option<String>) -> Result<Option<String>, AppError> {
    value.map(|v| non_empty(field, &v)).transpose()
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(auth::me))
        .route("/logout", post(auth::logout))
        .route("/session", post(auth::exchange_session))
}

/// Create the event routes router.
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list).post(events::create))
        .route("/upcoming", get(events::upcoming))
        .route(
            "/{id}",
            get(events::get_by_id)
                .patch(events::update)
                .delete(events::delete),
        )
}

/// Create the sermon routes router.
pub fn sermon_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(sermons::list).post(sermons::create))
        .route(
            "/{id}",
            get(sermons::get_by_id)
                .patch(sermons::update)
                .delete(sermons::delete),
        )
}

/// Create the prayer request routes router.
pub fn prayer_request_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(prayer_requests::list).post(prayer_requests::create))
        .route("/all", get(prayer_requests::list_all))
        .route("/{id}/status", post(prayer_requests::update_status))
}

/// Create the contact routes router.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::send))
        .route("/messages", get(contact::list))
        .route("/messages/{id}/status", post(contact::update_status))
}

/// Create the newsletter routes router.
pub fn newsletter_routes() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(newsletter::subscribe))
        .route("/unsubscribe", post(newsletter::unsubscribe))
        .route("/subscriptions", get(newsletter::list))
}

/// Create the donation routes router.
pub fn donation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(donations::list).post(donations::create))
        .route("/{id}/status", post(donations::update_status))
}

/// Create the church info routes router.
pub fn church_info_routes() -> Router<AppState> {
    Router::new().route("/", get(church_info::show).put(church_info::update))
}

/// Create the service time routes router.
pub fn service_time_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_times::list).post(service_times::create))
        .route(
            "/{id}",
            axum::routing::patch(service_times::update).delete(service_times::delete),
        )
}

/// Create the staff routes router.
pub fn staff_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(staff::list).post(staff::create))
        .route(
            "/{id}",
            get(staff::get_by_id).patch(staff::update).delete(staff::delete),
        )
}

/// Create all API routes.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/events", event_routes())
        .nest("/sermons", sermon_routes())
        .nest("/prayer-requests", prayer_request_routes())
        .nest("/contact", contact_routes())
        .nest("/newsletter", newsletter_routes())
        .nest("/donations", donation_routes())
        .nest("/church-info", church_info_routes())
        .nest("/service-times", service_time_routes())
        .nest("/staff", staff_routes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims_and_rejects_blank() {
        assert_eq!(non_empty("title", "  Sunday  ").unwrap(), "Sunday");
        assert!(non_empty("title", "   ").is_err());
        assert!(non_empty("title", "").is_err());
    }

    #[test]
    fn test_non_empty_opt_passes_none_through() {
        assert_eq!(non_empty_opt("title", None).unwrap(), None);
        assert_eq!(
            non_empty_opt("title", Some(" x ".to_string())).unwrap(),
            Some("x".to_string())
        );
        assert!(non_empty_opt("title", Some(" ".to_string())).is_err());
    }

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(Success::OK).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }
}
