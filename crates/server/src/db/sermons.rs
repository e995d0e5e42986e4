//! Sermon repository.

use chrono::{DateTime, Utc};

use parish_core::SermonId;

use super::{Database, RepositoryError};
use crate::models::{Sermon, SermonUpdate};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for sermon queries.
#[derive(Debug, sqlx::FromRow)]
struct SermonRow {
    id: String,
    title: String,
    speaker: String,
    description: Option<String>,
    sermon_date: DateTime<Utc>,
    video_url: Option<String>,
    audio_url: Option<String>,
    thumbnail_url: Option<String>,
    scripture: Option<String>,
    series: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SermonRow> for Sermon {
    fn from(row: SermonRow) -> Self {
        Self {
            id: SermonId::new(row.id),
            title: row.title,
            speaker: row.speaker,
            description: row.description,
            sermon_date: row.sermon_date,
            video_url: row.video_url,
            audio_url: row.audio_url,
            thumbnail_url: row.thumbnail_url,
            scripture: row.scripture,
            series: row.series,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for sermon database operations.
pub struct SermonRepository<'a> {
    db: &'a Database,
}

impl<'a> SermonRepository<'a> {
    /// Create a new sermon repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a fully constructed sermon.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, sermon: &Sermon) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        sqlx::query(
            r"
            INSERT INTO sermons
                (id, title, speaker, description, sermon_date, video_url,
                 audio_url, thumbnail_url, scripture, series, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(sermon.id.as_str())
        .bind(&sermon.title)
        .bind(&sermon.speaker)
        .bind(sermon.description.as_deref())
        .bind(sermon.sermon_date)
        .bind(sermon.video_url.as_deref())
        .bind(sermon.audio_url.as_deref())
        .bind(sermon.thumbnail_url.as_deref())
        .bind(sermon.scripture.as_deref())
        .bind(sermon.series.as_deref())
        .bind(sermon.created_at)
        .bind(sermon.updated_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List all sermons, most recent sermon date first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Sermon>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, SermonRow>(
            r"
            SELECT id, title, speaker, description, sermon_date, video_url,
                   audio_url, thumbnail_url, scripture, series, created_at, updated_at
            FROM sermons
            ORDER BY sermon_date DESC
            ",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a sermon by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: &SermonId) -> Result<Option<Sermon>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, SermonRow>(
            r"
            SELECT id, title, speaker, description, sermon_date, video_url,
                   audio_url, thumbnail_url, scripture, series, created_at, updated_at
            FROM sermons
            WHERE id = ?
            ",
        )
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Apply a partial update; absent fields keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the sermon doesn't exist.
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: &SermonId,
        update: &SermonUpdate,
    ) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query(
            r"
            UPDATE sermons SET
                title = COALESCE(?, title),
                speaker = COALESCE(?, speaker),
                description = COALESCE(?, description),
                sermon_date = COALESCE(?, sermon_date),
                video_url = COALESCE(?, video_url),
                audio_url = COALESCE(?, audio_url),
                thumbnail_url = COALESCE(?, thumbnail_url),
                scripture = COALESCE(?, scripture),
                series = COALESCE(?, series),
                updated_at = ?
            WHERE id = ?
            ",
        )
        .bind(update.title.as_deref())
        .bind(update.speaker.as_deref())
        .bind(update.description.as_deref())
        .bind(update.sermon_date)
        .bind(update.video_url.as_deref())
        .bind(update.audio_url.as_deref())
        .bind(update.thumbnail_url.as_deref())
        .bind(update.scripture.as_deref())
        .bind(update.series.as_deref())
        .bind(Utc::now())
        .bind(id.as_str())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a sermon.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the sermon doesn't exist.
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: &SermonId) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query("DELETE FROM sermons WHERE id = ?")
            .bind(id.as_str())
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
