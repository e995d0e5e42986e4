//! Service time repository.

use chrono::{DateTime, Utc};

use parish_core::{DayOfWeek, ServiceTimeId};

use super::{Database, RepositoryError};
use crate::models::{ServiceTime, ServiceTimeUpdate};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for service time queries.
#[derive(Debug, sqlx::FromRow)]
struct ServiceTimeRow {
    id: String,
    name: String,
    day_of_week: String,
    time: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ServiceTimeRow> for ServiceTime {
    type Error = RepositoryError;

    fn try_from(row: ServiceTimeRow) -> Result<Self, Self::Error> {
        let day_of_week = row
            .day_of_week
            .parse::<DayOfWeek>()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: ServiceTimeId::new(row.id),
            name: row.name,
            day_of_week,
            time: row.time,
            description: row.description,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for service time database operations.
pub struct ServiceTimeRepository<'a> {
    db: &'a Database,
}

impl<'a> ServiceTimeRepository<'a> {
    /// Create a new service time repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a fully constructed service time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, service_time: &ServiceTime) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        sqlx::query(
            r"
            INSERT INTO service_times
                (id, name, day_of_week, time, description, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(service_time.id.as_str())
        .bind(&service_time.name)
        .bind(service_time.day_of_week.as_str())
        .bind(&service_time.time)
        .bind(service_time.description.as_deref())
        .bind(service_time.is_active)
        .bind(service_time.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List active service times in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_active(&self) -> Result<Vec<ServiceTime>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, ServiceTimeRow>(
            r"
            SELECT id, name, day_of_week, time, description, is_active, created_at
            FROM service_times
            WHERE is_active = 1
            ORDER BY created_at ASC
            ",
        )
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Apply a partial update; absent fields keep their stored values.
    ///
    /// Deactivating a service time (`is_active: false`) keeps the row so it
    /// can be turned back on later.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the service time doesn't
    /// exist. Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: &ServiceTimeId,
        update: &ServiceTimeUpdate,
    ) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query(
            r"
            UPDATE service_times SET
                name = COALESCE(?, name),
                day_of_week = COALESCE(?, day_of_week),
                time = COALESCE(?, time),
                description = COALESCE(?, description),
                is_active = COALESCE(?, is_active)
            WHERE id = ?
            ",
        )
        .bind(update.name.as_deref())
        .bind(update.day_of_week.map(DayOfWeek::as_str))
        .bind(update.time.as_deref())
        .bind(update.description.as_deref())
        .bind(update.is_active)
        .bind(id.as_str())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a service time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the service time doesn't
    /// exist. Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: &ServiceTimeId) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query("DELETE FROM service_times WHERE id = ?")
            .bind(id.as_str())
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
