//! Staff member repository.

use chrono::{DateTime, Utc};

use parish_core::{Email, StaffId};

use super::{Database, RepositoryError};
use crate::models::{StaffMember, StaffUpdate};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for staff queries.
#[derive(Debug, sqlx::FromRow)]
struct StaffRow {
    id: String,
    name: String,
    title: String,
    bio: Option<String>,
    photo_url: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    display_order: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<StaffRow> for StaffMember {
    type Error = RepositoryError;

    fn try_from(row: StaffRow) -> Result<Self, Self::Error> {
        let email = row.email.map(|e| Email::parse(&e)).transpose().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: StaffId::new(row.id),
            name: row.name,
            title: row.title,
            bio: row.bio,
            photo_url: row.photo_url,
            email,
            phone: row.phone,
            display_order: row.display_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for staff member database operations.
pub struct StaffRepository<'a> {
    db: &'a Database,
}

impl<'a> StaffRepository<'a> {
    /// Create a new staff repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a fully constructed staff member.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, member: &StaffMember) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        sqlx::query(
            r"
            INSERT INTO staff
                (id, name, title, bio, photo_url, email, phone,
                 display_order, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(member.id.as_str())
        .bind(&member.name)
        .bind(&member.title)
        .bind(member.bio.as_deref())
        .bind(member.photo_url.as_deref())
        .bind(member.email.as_ref().map(Email::as_str))
        .bind(member.phone.as_deref())
        .bind(member.display_order)
        .bind(member.is_active)
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List active staff members in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_active(&self) -> Result<Vec<StaffMember>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, StaffRow>(
            r"
            SELECT id, name, title, bio, photo_url, email, phone,
                   display_order, is_active, created_at, updated_at
            FROM staff
            WHERE is_active = 1
            ORDER BY display_order ASC
            ",
        )
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a staff member by ID, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(&self, id: &StaffId) -> Result<Option<StaffMember>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, StaffRow>(
            r"
            SELECT id, name, title, bio, photo_url, email, phone,
                   display_order, is_active, created_at, updated_at
            FROM staff
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
    /// Returns `RepositoryError::NotFound` if the staff member doesn't
    /// exist. Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: &StaffId, update: &StaffUpdate) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query(
            r"
            UPDATE staff SET
                name = COALESCE(?, name),
                title = COALESCE(?, title),
                bio = COALESCE(?, bio),
                photo_url = COALESCE(?, photo_url),
                email = COALESCE(?, email),
                phone = COALESCE(?, phone),
                display_order = COALESCE(?, display_order),
                is_active = COALESCE(?, is_active),
                updated_at = ?
            WHERE id = ?
            ",
        )
        .bind(update.name.as_deref())
        .bind(update.title.as_deref())
        .bind(update.bio.as_deref())
        .bind(update.photo_url.as_deref())
        .bind(update.email.as_ref().map(Email::as_str))
        .bind(update.phone.as_deref())
        .bind(update.display_order)
        .bind(update.is_active)
        .bind(Utc::now())
        .bind(id.as_str())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a staff member.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the staff member doesn't
    /// exist. Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: &StaffId) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query("DELETE FROM staff WHERE id = ?")
            .bind(id.as_str())
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
