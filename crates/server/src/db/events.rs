//! Event repository.

use chrono::{DateTime, Utc};

use parish_core::{EventCategory, EventId, UserId};

use super::{Database, RepositoryError};
use crate::models::{Event, EventUpdate};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for event queries.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: String,
    title: String,
    description: Option<String>,
    event_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    location: Option<String>,
    image_url: Option<String>,
    category: String,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = RepositoryError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let category = row
            .category
            .parse::<EventCategory>()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: EventId::new(row.id),
            title: row.title,
            description: row.description,
            event_date: row.event_date,
            end_date: row.end_date,
            location: row.location,
            image_url: row.image_url,
            category,
            created_by: UserId::new(row.created_by),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for event database operations.
pub struct EventRepository<'a> {
    db: &'a Database,
}

impl<'a> EventRepository<'a> {
    /// Create a new event repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a fully constructed event.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, event: &Event) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        sqlx::query(
            r"
            INSERT INTO events
                (id, title, description, event_date, end_date, location,
                 image_url, category, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(event.id.as_str())
        .bind(&event.title)
        .bind(event.description.as_deref())
        .bind(event.event_date)
        .bind(event.end_date)
        .bind(event.location.as_deref())
        .bind(event.image_url.as_deref())
        .bind(event.category.as_str())
        .bind(event.created_by.as_str())
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List all events, newest event date first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, EventRow>(
            r"
            SELECT id, title, description, event_date, end_date, location,
                   image_url, category, created_by, created_at, updated_at
            FROM events
            ORDER BY event_date DESC
            ",
        )
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// List events whose date is still ahead of now, soonest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_upcoming(&self) -> Result<Vec<Event>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, EventRow>(
            r"
            SELECT id, title, description, event_date, end_date, location,
                   image_url, category, created_by, created_at, updated_at
            FROM events
            WHERE event_date >= ?
            ORDER BY event_date ASC
            ",
        )
        .bind(Utc::now())
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get an event by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(&self, id: &EventId) -> Result<Option<Event>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, EventRow>(
            r"
            SELECT id, title, description, event_date, end_date, location,
                   image_url, category, created_by, created_at, updated_at
            FROM events
            WHERE id = ?
            ",
        )
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Apply a partial update; absent fields keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the event doesn't exist.
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: &EventId, update: &EventUpdate) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query(
            r"
            UPDATE events SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                event_date = COALESCE(?, event_date),
                end_date = COALESCE(?, end_date),
                location = COALESCE(?, location),
                image_url = COALESCE(?, image_url),
                category = COALESCE(?, category),
                updated_at = ?
            WHERE id = ?
            ",
        )
        .bind(update.title.as_deref())
        .bind(update.description.as_deref())
        .bind(update.event_date)
        .bind(update.end_date)
        .bind(update.location.as_deref())
        .bind(update.image_url.as_deref())
        .bind(update.category.map(EventCategory::as_str))
        .bind(Utc::now())
        .bind(id.as_str())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete an event.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the event doesn't exist.
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: &EventId) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id.as_str())
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
