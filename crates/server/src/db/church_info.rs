//! Church info repository.
//!
//! The `church_info` table holds at most one row. The upsert replaces the
//! row's content wholesale rather than patching it, so the admin form is
//! always the complete source of truth for the public profile.

use chrono::{DateTime, Utc};

use parish_core::{ChurchInfoId, Email};

use super::{Database, RepositoryError};
use crate::models::{ChurchInfo, ChurchInfoUpdate};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for church info queries.
#[derive(Debug, sqlx::FromRow)]
struct ChurchInfoRow {
    id: String,
    name: String,
    tagline: Option<String>,
    description: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    logo_url: Option<String>,
    banner_url: Option<String>,
    facebook_url: Option<String>,
    instagram_url: Option<String>,
    youtube_url: Option<String>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ChurchInfoRow> for ChurchInfo {
    type Error = RepositoryError;

    fn try_from(row: ChurchInfoRow) -> Result<Self, Self::Error> {
        let email = row.email.map(|e| Email::parse(&e)).transpose().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: ChurchInfoId::new(row.id),
            name: row.name,
            tagline: row.tagline,
            description: row.description,
            address: row.address,
            phone: row.phone,
            email,
            logo_url: row.logo_url,
            banner_url: row.banner_url,
            facebook_url: row.facebook_url,
            instagram_url: row.instagram_url,
            youtube_url: row.youtube_url,
            updated_at: row.updated_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for the church profile singleton.
pub struct ChurchInfoRepository<'a> {
    db: &'a Database,
}

impl<'a> ChurchInfoRepository<'a> {
    /// Create a new church info repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get the church profile, if one has been saved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get(&self) -> Result<Option<ChurchInfo>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ChurchInfoRow>(
            r"
            SELECT id, name, tagline, description, address, phone, email,
                   logo_url, banner_url, facebook_url, instagram_url,
                   youtube_url, updated_at
            FROM church_info
            LIMIT 1
            ",
        )
        .fetch_optional(pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Replace the church profile, creating the row on first save.
    ///
    /// The existing row keeps its id; optional fields absent from `update`
    /// are cleared, not preserved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if a query fails.
    pub async fn upsert(&self, update: &ChurchInfoUpdate) -> Result<ChurchInfoId, RepositoryError> {
        let pool = self.db.write_pool()?;
        let now = Utc::now();

        let existing_id: Option<String> =
            sqlx::query_scalar("SELECT id FROM church_info LIMIT 1")
                .fetch_optional(pool)
                .await?;

        let id = match existing_id {
            Some(id) => {
                sqlx::query(
                    r"
                    UPDATE church_info SET
                        name = ?, tagline = ?, description = ?, address = ?,
                        phone = ?, email = ?, logo_url = ?, banner_url = ?,
                        facebook_url = ?, instagram_url = ?, youtube_url = ?,
                        updated_at = ?
                    WHERE id = ?
                    ",
                )
                .bind(&update.name)
                .bind(update.tagline.as_deref())
                .bind(update.description.as_deref())
                .bind(update.address.as_deref())
                .bind(update.phone.as_deref())
                .bind(update.email.as_ref().map(Email::as_str))
                .bind(update.logo_url.as_deref())
                .bind(update.banner_url.as_deref())
                .bind(update.facebook_url.as_deref())
                .bind(update.instagram_url.as_deref())
                .bind(update.youtube_url.as_deref())
                .bind(now)
                .bind(&id)
                .execute(pool)
                .await?;
                ChurchInfoId::new(id)
            }
            None => {
                let id = ChurchInfoId::generate();
                sqlx::query(
                    r"
                    INSERT INTO church_info
                        (id, name, tagline, description, address, phone, email,
                         logo_url, banner_url, facebook_url, instagram_url,
                         youtube_url, updated_at)
                    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                    ",
                )
                .bind(id.as_str())
                .bind(&update.name)
                .bind(update.tagline.as_deref())
                .bind(update.description.as_deref())
                .bind(update.address.as_deref())
                .bind(update.phone.as_deref())
                .bind(update.email.as_ref().map(Email::as_str))
                .bind(update.logo_url.as_deref())
                .bind(update.banner_url.as_deref())
                .bind(update.facebook_url.as_deref())
                .bind(update.instagram_url.as_deref())
                .bind(update.youtube_url.as_deref())
                .bind(now)
                .execute(pool)
                .await?;
                id
            }
        };

        Ok(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::TestDb;

    fn profile(name: &str) -> ChurchInfoUpdate {
        ChurchInfoUpdate {
            name: name.to_string(),
            tagline: Some("A place to belong".to_string()),
            description: None,
            address: None,
            phone: None,
            email: None,
            logo_url: None,
            banner_url: None,
            facebook_url: None,
            instagram_url: None,
            youtube_url: None,
        }
    }

    #[tokio::test]
    async fn test_repeated_saves_keep_one_row_and_one_id() {
        let test_db = TestDb::create().await;
        let church_info = test_db.db.church_info();

        let first_id = church_info.upsert(&profile("Grace Chapel")).await.unwrap();
        let second_id = church_info
            .upsert(&profile("Grace Community Chapel"))
            .await
            .unwrap();

        assert_eq!(first_id, second_id);
        let saved = church_info.get().await.unwrap().unwrap();
        assert_eq!(saved.name, "Grace Community Chapel");
    }

    #[tokio::test]
    async fn test_absent_optional_fields_are_cleared() {
        let test_db = TestDb::create().await;
        let church_info = test_db.db.church_info();

        church_info.upsert(&profile("Grace Chapel")).await.unwrap();
        church_info
            .upsert(&ChurchInfoUpdate {
                tagline: None,
                ..profile("Grace Chapel")
            })
            .await
            .unwrap();

        let saved = church_info.get().await.unwrap().unwrap();
        assert_eq!(saved.tagline, None);
    }
}
