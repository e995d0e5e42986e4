//! Contact message repository.

use chrono::{DateTime, Utc};

use parish_core::{ContactMessageId, ContactStatus, Email};

use super::{Database, RepositoryError};
use crate::models::ContactMessage;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for contact message queries.
#[derive(Debug, sqlx::FromRow)]
struct ContactMessageRow {
    id: String,
    name: String,
    email: String,
    phone: Option<String>,
    subject: Option<String>,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContactMessageRow> for ContactMessage {
    type Error = RepositoryError;

    fn try_from(row: ContactMessageRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let status = row
            .status
            .parse::<ContactStatus>()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: ContactMessageId::new(row.id),
            name: row.name,
            email,
            phone: row.phone,
            subject: row.subject,
            message: row.message,
            status,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for contact message database operations.
pub struct ContactMessageRepository<'a> {
    db: &'a Database,
}

impl<'a> ContactMessageRepository<'a> {
    /// Create a new contact message repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a fully constructed contact message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, message: &ContactMessage) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        sqlx::query(
            r"
            INSERT INTO contact_messages
                (id, name, email, phone, subject, message, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(message.id.as_str())
        .bind(&message.name)
        .bind(message.email.as_str())
        .bind(message.phone.as_deref())
        .bind(message.subject.as_deref())
        .bind(&message.message)
        .bind(message.status.as_str())
        .bind(message.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List all contact messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, ContactMessageRow>(
            r"
            SELECT id, name, email, phone, subject, message, status, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Set a contact message's triage status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the message doesn't exist.
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: &ContactMessageId,
        status: ContactStatus,
    ) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query("UPDATE contact_messages SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id.as_str())
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
