//! Owner notification client.
//!
//! Posts a short title/content payload to a configured webhook whenever a
//! visitor submits something an admin should look at (prayer requests,
//! contact messages, donations). Delivery is best-effort: submissions must
//! never fail because the webhook is down, so handlers send through
//! [`Notifier::notify_in_background`].

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Errors that can occur when delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed.
    #[error("notification request failed: {0}")]
    Request(String),

    /// Webhook answered with a non-success status.
    #[error("notification webhook error: {0}")]
    Api(String),
}

/// Notification payload sent to the webhook.
#[derive(Debug, serde::Serialize)]
struct Notification<'a> {
    title: &'a str,
    content: &'a str,
}

/// Client for sending owner notifications.
#[derive(Clone)]
pub struct Notifier {
    /// HTTP client.
    client: Client,
    /// Webhook endpoint; notifications are skipped when unset.
    webhook_url: Option<String>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("webhook_url", &self.webhook_url.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl Notifier {
    /// Create a new notifier.
    #[must_use]
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }

    /// Whether a webhook endpoint is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Send a notification to the owner webhook.
    ///
    /// A missing webhook configuration is not an error; the notification is
    /// simply skipped.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the webhook rejects it.
    #[instrument(skip(self, content), fields(title = %title))]
    pub async fn notify_owner(&self, title: &str, content: &str) -> Result<(), NotifyError> {
        let Some(url) = self.webhook_url.as_deref() else {
            debug!("notification webhook not configured, skipping");
            return Ok(());
        };

        let response = self
            .client
            .post(url)
            .json(&Notification { title, content })
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError::Api(response.status().to_string()));
        }

        debug!("owner notification delivered");
        Ok(())
    }

    /// Send a notification without waiting for the result.
    ///
    /// Failures are logged and otherwise dropped.
    pub fn notify_in_background(&self, title: &str, content: String) {
        if !self.is_configured() {
            return;
        }

        let notifier = self.clone();
        let title = title.to_string();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify_owner(&title, &content).await {
                warn!(error = %e, "failed to deliver owner notification");
            }
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_notifier_skips_without_error() {
        let notifier = Notifier::new(None);
        assert!(!notifier.is_configured());
        notifier.notify_owner("Test", "content").await.unwrap();
    }

    #[test]
    fn test_debug_redacts_webhook_url() {
        let notifier = Notifier::new(Some("https://hooks.example.com/secret-token".to_string()));
        let debug = format!("{notifier:?}");
        assert!(!debug.contains("secret-token"));
    }
}
