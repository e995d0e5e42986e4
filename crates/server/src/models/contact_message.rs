//! Contact message domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::{ContactMessageId, ContactStatus, Email};

/// A message sent through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Unique message ID.
    pub id: ContactMessageId,
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: Email,
    /// Phone number, if provided.
    pub phone: Option<String>,
    /// Subject line, if provided.
    pub subject: Option<String>,
    /// The message body.
    pub message: String,
    /// Triage status, managed by admins.
    pub status: ContactStatus,
    /// When the message was received.
    pub created_at: DateTime<Utc>,
}

/// Payload for sending a contact message.
#[derive(Debug, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}
