//! Newsletter subscription repository.

use chrono::{DateTime, Utc};

use parish_core::{Email, SubscriptionId, SubscriptionStatus};

use super::{Database, RepositoryError};
use crate::models::NewsletterSubscription;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for subscription queries.
#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: String,
    email: String,
    name: Option<String>,
    status: String,
    subscribed_at: DateTime<Utc>,
    unsubscribed_at: Option<DateTime<Utc>>,
}

impl TryFrom<SubscriptionRow> for NewsletterSubscription {
    type Error = RepositoryError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let status = row
            .status
            .parse::<SubscriptionStatus>()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: SubscriptionId::new(row.id),
            email,
            name: row.name,
            status,
            subscribed_at: row.subscribed_at,
            unsubscribed_at: row.unsubscribed_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for newsletter subscription database operations.
pub struct NewsletterRepository<'a> {
    db: &'a Database,
}

impl<'a> NewsletterRepository<'a> {
    /// Create a new newsletter repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a new subscription.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already
    /// subscribed. Returns `RepositoryError::Unavailable` when storage is
    /// not configured, `RepositoryError::Database` for other errors.
    pub async fn create(&self, subscription: &NewsletterSubscription) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        sqlx::query(
            r"
            INSERT INTO newsletter_subscriptions
                (id, email, name, status, subscribed_at, unsubscribed_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(subscription.id.as_str())
        .bind(subscription.email.as_str())
        .bind(subscription.name.as_deref())
        .bind(subscription.status.as_str())
        .bind(subscription.subscribed_at)
        .bind(subscription.unsubscribed_at)
        .execute(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already subscribed".to_string());
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    /// List active subscriptions, most recently subscribed first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_active(&self) -> Result<Vec<NewsletterSubscription>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, SubscriptionRow>(
            r"
            SELECT id, email, name, status, subscribed_at, unsubscribed_at
            FROM newsletter_subscriptions
            WHERE status = 'active'
            ORDER BY subscribed_at DESC
            ",
        )
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Mark an email address as unsubscribed.
    ///
    /// Unknown addresses are ignored so an unsubscribe link can be clicked
    /// more than once (or after the record is gone) without an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if the update fails.
    pub async fn unsubscribe(&self, email: &Email) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        sqlx::query(
            r"
            UPDATE newsletter_subscriptions
            SET status = 'unsubscribed', unsubscribed_at = ?
            WHERE email = ?
            ",
        )
        .bind(Utc::now())
        .bind(email.as_str())
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::TestDb;

    fn subscription(email: &str) -> NewsletterSubscription {
        NewsletterSubscription {
            id: SubscriptionId::generate(),
            email: Email::parse(email).unwrap(),
            name: None,
            status: SubscriptionStatus::Active,
            subscribed_at: Utc::now(),
            unsubscribed_at: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let test_db = TestDb::create().await;
        let newsletter = test_db.db.newsletter();

        newsletter
            .create(&subscription("ada@example.com"))
            .await
            .unwrap();
        let err = newsletter
            .create(&subscription("ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_unsubscribe_removes_from_active_listing() {
        let test_db = TestDb::create().await;
        let newsletter = test_db.db.newsletter();

        newsletter
            .create(&subscription("ada@example.com"))
            .await
            .unwrap();
        newsletter
            .create(&subscription("grace@example.com"))
            .await
            .unwrap();
        newsletter
            .unsubscribe(&Email::parse("ada@example.com").unwrap())
            .await
            .unwrap();

        let active = newsletter.list_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].email.as_str(), "grace@example.com");
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_email_is_a_no_op() {
        let test_db = TestDb::create().await;

        test_db
            .db
            .newsletter()
            .unsubscribe(&Email::parse("nobody@example.com").unwrap())
            .await
            .unwrap();
    }
}
