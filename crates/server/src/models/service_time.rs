//! Service time domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::{DayOfWeek, ServiceTimeId};

/// A recurring weekly service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceTime {
    /// Unique service-time ID.
    pub id: ServiceTimeId,
    /// Service name (e.g. "Sunday Worship").
    pub name: String,
    /// Day of the week the service runs.
    pub day_of_week: DayOfWeek,
    /// Start time as free text (e.g. "10:00 AM").
    pub time: String,
    /// Extra details, if any.
    pub description: Option<String>,
    /// Whether the service appears on the public schedule
    /// ("yes"/"no" on the wire).
    #[serde(with = "parish_core::yes_no")]
    pub is_active: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a service time. New services start active.
#[derive(Debug, Deserialize)]
pub struct NewServiceTime {
    pub name: String,
    pub day_of_week: DayOfWeek,
    pub time: String,
    pub description: Option<String>,
}

/// Partial update for a service time. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceTimeUpdate {
    pub name: Option<String>,
    pub day_of_week: Option<DayOfWeek>,
    pub time: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "parish_core::yes_no::option")]
    pub is_active: Option<bool>,
}
