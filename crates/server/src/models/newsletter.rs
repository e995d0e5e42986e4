//! Newsletter subscription domain types.
//!
//! Unsubscribing flips the status and stamps `unsubscribed_at`; rows are
//! never deleted, so the full subscription history is retained.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parish_core::{Email, SubscriptionId, SubscriptionStatus};

/// A newsletter subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    /// Unique subscription ID.
    pub id: SubscriptionId,
    /// Subscriber's email address. Unique across all subscriptions.
    pub email: Email,
    /// Subscriber's name, if provided.
    pub name: Option<String>,
    /// Active or unsubscribed.
    pub status: SubscriptionStatus,
    /// When the subscription was created.
    pub subscribed_at: DateTime<Utc>,
    /// When the subscriber opted out, if they did.
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

/// Payload for subscribing to the newsletter.
#[derive(Debug, Deserialize)]
pub struct NewSubscription {
    pub email: Email,
    pub name: Option<String>,
}
