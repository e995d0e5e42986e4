//! Event domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::{EventCategory, EventId, UserId};

/// A church event or activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique event ID.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// When the event starts.
    pub event_date: DateTime<Utc>,
    /// When the event ends, for multi-hour or multi-day events.
    pub end_date: Option<DateTime<Utc>>,
    /// Where the event takes place.
    pub location: Option<String>,
    /// Promotional image URL.
    pub image_url: Option<String>,
    /// Event category for filtering.
    pub category: EventCategory,
    /// ID of the admin who created the event.
    pub created_by: UserId,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an event.
#[derive(Debug, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: EventCategory,
}

/// Partial update for an event. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<EventCategory>,
}
