//! Database operations for the parish site.
//!
//! # Storage: `SQLite`
//!
//! ## Tables
//!
//! - `users` - Identities synced from the identity provider
//! - `events` - Church events and activities
//! - `sermons` - Sermon media library
//! - `prayer_requests` - Prayer wall submissions
//! - `contact_messages` - Contact form messages
//! - `newsletter_subscriptions` - Newsletter signups
//! - `donations` - Recorded donation intents
//! - `church_info` - The singleton church profile
//! - `service_times` - Weekly service schedule
//! - `staff` - Pastors and staff
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p parish-cli -- migrate
//! ```
//!
//! # Unconfigured storage
//!
//! The server boots without a database URL. In that mode reads degrade to
//! empty results while writes fail with [`RepositoryError::Unavailable`];
//! the public site stays browsable even before storage is provisioned.

pub mod church_info;
pub mod contact_messages;
pub mod donations;
pub mod events;
pub mod newsletter;
pub mod prayer_requests;
pub mod sermons;
pub mod service_times;
pub mod staff;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::SqlitePool;
use thiserror::Error;

pub use church_info::ChurchInfoRepository;
pub use contact_messages::ContactMessageRepository;
pub use donations::DonationRepository;
pub use events::EventRepository;
pub use newsletter::NewsletterRepository;
pub use prayer_requests::PrayerRequestRepository;
pub use sermons::SermonRepository;
pub use service_times::ServiceTimeRepository;
pub use staff::StaffRepository;
pub use users::UserRepository;

/// Embedded migrations from `crates/server/migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Storage is not configured; the write cannot proceed.
    #[error("storage not configured")]
    Unavailable,
}

/// Handle to the `SQLite` store, constructed once at startup.
///
/// Wraps an optional connection pool so the unconfigured mode is explicit
/// rather than a lazily failing global.
#[derive(Debug, Clone)]
pub struct Database {
    pool: Option<SqlitePool>,
}

impl Database {
    /// Open a `SQLite` connection pool with sensible defaults.
    ///
    /// Creates the database file if missing and enables WAL mode so reads
    /// do not block behind writes.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the URL is invalid or the file cannot be
    /// opened.
    pub async fn connect(database_url: &SecretString) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool: Some(pool) })
    }

    /// A handle with no backing store: reads come back empty, writes fail.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { pool: None }
    }

    /// Whether a backing store is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    /// The underlying pool, for migrations and the session store.
    #[must_use]
    pub const fn pool(&self) -> Option<&SqlitePool> {
        self.pool.as_ref()
    }

    /// Check reachability for the readiness probe.
    ///
    /// Returns `Ok(false)` when storage is not configured (the service is
    /// still serviceable) and `Err` when a configured database cannot be
    /// queried.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the probe query fails.
    pub async fn ping(&self) -> Result<bool, sqlx::Error> {
        match &self.pool {
            Some(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Close the pool, letting in-flight queries finish.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }

    /// Pool for read operations. `None` degrades the read to an empty
    /// result.
    fn read_pool(&self) -> Option<&SqlitePool> {
        self.pool.as_ref()
    }

    /// Pool for write operations.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured.
    fn write_pool(&self) -> Result<&SqlitePool, RepositoryError> {
        self.pool.as_ref().ok_or(RepositoryError::Unavailable)
    }

    /// User repository.
    #[must_use]
    pub const fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self)
    }

    /// Event repository.
    #[must_use]
    pub const fn events(&self) -> EventRepository<'_> {
        EventRepository::new(self)
    }

    /// Sermon repository.
    #[must_use]
    pub const fn sermons(&self) -> SermonRepository<'_> {
        SermonRepository::new(self)
    }

    /// Prayer request repository.
    #[must_use]
    pub const fn prayer_requests(&self) -> PrayerRequestRepository<'_> {
        PrayerRequestRepository::new(self)
    }

    /// Contact message repository.
    #[must_use]
    pub const fn contact_messages(&self) -> ContactMessageRepository<'_> {
        ContactMessageRepository::new(self)
    }

    /// Newsletter subscription repository.
    #[must_use]
    pub const fn newsletter(&self) -> NewsletterRepository<'_> {
        NewsletterRepository::new(self)
    }

    /// Donation repository.
    #[must_use]
    pub const fn donations(&self) -> DonationRepository<'_> {
        DonationRepository::new(self)
    }

    /// Church profile repository.
    #[must_use]
    pub const fn church_info(&self) -> ChurchInfoRepository<'_> {
        ChurchInfoRepository::new(self)
    }

    /// Service time repository.
    #[must_use]
    pub const fn service_times(&self) -> ServiceTimeRepository<'_> {
        ServiceTimeRepository::new(self)
    }

    /// Staff repository.
    #[must_use]
    pub const fn staff(&self) -> StaffRepository<'_> {
        StaffRepository::new(self)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    use parish_core::EntityId;
    use secrecy::SecretString;

    use super::{Database, MIGRATOR};

    /// A migrated temp-file database that cleans up after itself.
    pub struct TestDb {
        pub db: Database,
        path: PathBuf,
    }

    impl TestDb {
        pub async fn create() -> Self {
            let path = std::env::temp_dir()
                .join(format!("parish-test-{}.sqlite", EntityId::generate()));
            let url = SecretString::from(format!("sqlite://{}", path.display()));
            let db = Database::connect(&url)
                .await
                .expect("failed to open temp database");
            let pool = db.pool().expect("temp database has a pool");
            MIGRATOR.run(pool).await.expect("failed to run migrations");
            Self { db, path }
        }
    }

    impl Drop for TestDb {
        fn drop(&mut self) {
            // WAL leaves sidecar files next to the database
            let _ = std::fs::remove_file(&self.path);
            let _ = std::fs::remove_file(self.path.with_extension("sqlite-wal"));
            let _ = std::fs::remove_file(self.path.with_extension("sqlite-shm"));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use parish_core::EventId;

    use super::*;

    #[tokio::test]
    async fn test_unconfigured_reads_are_empty() {
        let db = Database::unconfigured();
        assert!(!db.is_configured());

        assert!(db.events().list().await.unwrap().is_empty());
        assert!(db.sermons().list().await.unwrap().is_empty());
        assert!(db.staff().list_active().await.unwrap().is_empty());
        assert!(db.church_info().get().await.unwrap().is_none());
        assert!(db
            .events()
            .get_by_id(&EventId::new("missing"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_writes_fail() {
        let db = Database::unconfigured();

        let err = db.events().delete(&EventId::new("anything")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Unavailable));
    }

    #[tokio::test]
    async fn test_ping() {
        let db = Database::unconfigured();
        assert!(!db.ping().await.unwrap());

        let test_db = test_support::TestDb::create().await;
        assert!(test_db.db.ping().await.unwrap());
    }
}
