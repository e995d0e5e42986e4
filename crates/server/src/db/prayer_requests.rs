//! Prayer request repository.

use chrono::{DateTime, Utc};

use parish_core::{Email, PrayerRequestId, PrayerStatus};

use super::{Database, RepositoryError};
use crate::models::PrayerRequest;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for prayer request queries.
#[derive(Debug, sqlx::FromRow)]
struct PrayerRequestRow {
    id: String,
    name: String,
    email: Option<String>,
    request: String,
    is_public: bool,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PrayerRequestRow> for PrayerRequest {
    type Error = RepositoryError;

    fn try_from(row: PrayerRequestRow) -> Result<Self, Self::Error> {
        let email = row.email.map(|e| Email::parse(&e)).transpose().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let status = row
            .status
            .parse::<PrayerStatus>()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: PrayerRequestId::new(row.id),
            name: row.name,
            email,
            request: row.request,
            is_public: row.is_public,
            status,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for prayer request database operations.
pub struct PrayerRequestRepository<'a> {
    db: &'a Database,
}

impl<'a> PrayerRequestRepository<'a> {
    /// Create a new prayer request repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a fully constructed prayer request.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, request: &PrayerRequest) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        sqlx::query(
            r"
            INSERT INTO prayer_requests
                (id, name, email, request, is_public, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(request.id.as_str())
        .bind(&request.name)
        .bind(request.email.as_ref().map(Email::as_str))
        .bind(&request.request)
        .bind(request.is_public)
        .bind(request.status.as_str())
        .bind(request.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List prayer requests, newest first.
    ///
    /// With `public_only` set, only requests the submitter marked public
    /// *and* an admin has approved are returned; this is the variant served
    /// to anonymous visitors.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list(&self, public_only: bool) -> Result<Vec<PrayerRequest>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(Vec::new());
        };

        let sql = if public_only {
            r"
            SELECT id, name, email, request, is_public, status, created_at
            FROM prayer_requests
            WHERE is_public = 1 AND status = 'approved'
            ORDER BY created_at DESC
            "
        } else {
            r"
            SELECT id, name, email, request, is_public, status, created_at
            FROM prayer_requests
            ORDER BY created_at DESC
            "
        };

        let rows = sqlx::query_as::<_, PrayerRequestRow>(sql)
            .fetch_all(pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a prayer request by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(
        &self,
        id: &PrayerRequestId,
    ) -> Result<Option<PrayerRequest>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, PrayerRequestRow>(
            r"
            SELECT id, name, email, request, is_public, status, created_at
            FROM prayer_requests
            WHERE id = ?
            ",
        )
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Set a prayer request's moderation status.
    ///
    /// Transition rules live with the status type; callers are expected to
    /// check `PrayerStatus::can_transition_to` against the stored value
    /// before writing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the request doesn't exist.
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: &PrayerRequestId,
        status: PrayerStatus,
    ) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query("UPDATE prayer_requests SET status = ? WHERE id = ?")
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::TestDb;

    fn request(name: &str, is_public: bool) -> PrayerRequest {
        PrayerRequest {
            id: PrayerRequestId::generate(),
            name: name.to_string(),
            email: None,
            request: "Please pray for us".to_string(),
            is_public,
            status: PrayerStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_public_listing_requires_public_and_approved() {
        let test_db = TestDb::create().await;
        let prayers = test_db.db.prayer_requests();

        let approved = request("Ada", true);
        prayers.create(&approved).await.unwrap();
        prayers
            .update_status(&approved.id, PrayerStatus::Approved)
            .await
            .unwrap();
        // Public but still pending moderation
        prayers.create(&request("Grace", true)).await.unwrap();
        // Private
        prayers.create(&request("Joan", false)).await.unwrap();

        let all = prayers.list(false).await.unwrap();
        let public = prayers.list(true).await.unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_update_status_missing_request() {
        let test_db = TestDb::create().await;

        let err = test_db
            .db
            .prayer_requests()
            .update_status(&PrayerRequestId::new("ghost"), PrayerStatus::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
