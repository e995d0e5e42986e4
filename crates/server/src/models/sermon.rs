//! Sermon domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::SermonId;

/// A sermon in the media library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sermon {
    /// Unique sermon ID.
    pub id: SermonId,
    /// Sermon title.
    pub title: String,
    /// Who preached it.
    pub speaker: String,
    /// Summary or notes, if any.
    pub description: Option<String>,
    /// When the sermon was delivered.
    pub sermon_date: DateTime<Utc>,
    /// Video recording URL.
    pub video_url: Option<String>,
    /// Audio recording URL.
    pub audio_url: Option<String>,
    /// Thumbnail image URL.
    pub thumbnail_url: Option<String>,
    /// Scripture reference (e.g. "John 3:16-21").
    pub scripture: Option<String>,
    /// Sermon series this belongs to.
    pub series: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a sermon.
#[derive(Debug, Deserialize)]
pub struct NewSermon {
    pub title: String,
    pub speaker: String,
    pub description: Option<String>,
    pub sermon_date: DateTime<Utc>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub scripture: Option<String>,
    pub series: Option<String>,
}

/// Partial update for a sermon. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct SermonUpdate {
    pub title: Option<String>,
    pub speaker: Option<String>,
    pub description: Option<String>,
    pub sermon_date: Option<DateTime<Utc>>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub scripture: Option<String>,
    pub series: Option<String>,
}
