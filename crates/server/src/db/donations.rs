//! Donation repository.

use chrono::{DateTime, Utc};

use parish_core::{Amount, DonationId, DonationStatus, Email, UserId};

use super::{Database, RepositoryError};
use crate::models::Donation;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for donation queries.
#[derive(Debug, sqlx::FromRow)]
struct DonationRow {
    id: String,
    amount: i64,
    currency: String,
    donor_name: Option<String>,
    donor_email: Option<String>,
    purpose: Option<String>,
    is_anonymous: bool,
    status: String,
    user_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<DonationRow> for Donation {
    type Error = RepositoryError;

    fn try_from(row: DonationRow) -> Result<Self, Self::Error> {
        let amount = Amount::from_minor_units(row.amount).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid amount in database: {e}"))
        })?;
        let donor_email = row
            .donor_email
            .map(|e| Email::parse(&e))
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
            })?;
        let status = row
            .status
            .parse::<DonationStatus>()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: DonationId::new(row.id),
            amount,
            currency: row.currency,
            donor_name: row.donor_name,
            donor_email,
            purpose: row.purpose,
            is_anonymous: row.is_anonymous,
            status,
            user_id: row.user_id.map(UserId::new),
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for donation database operations.
pub struct DonationRepository<'a> {
    db: &'a Database,
}

impl<'a> DonationRepository<'a> {
    /// Create a new donation repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a fully constructed donation record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, donation: &Donation) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        sqlx::query(
            r"
            INSERT INTO donations
                (id, amount, currency, donor_name, donor_email, purpose,
                 is_anonymous, status, user_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(donation.id.as_str())
        .bind(donation.amount.as_minor_units())
        .bind(&donation.currency)
        .bind(donation.donor_name.as_deref())
        .bind(donation.donor_email.as_ref().map(Email::as_str))
        .bind(donation.purpose.as_deref())
        .bind(donation.is_anonymous)
        .bind(donation.status.as_str())
        .bind(donation.user_id.as_ref().map(UserId::as_str))
        .bind(donation.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List all donations, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list(&self) -> Result<Vec<Donation>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, DonationRow>(
            r"
            SELECT id, amount, currency, donor_name, donor_email, purpose,
                   is_anonymous, status, user_id, created_at
            FROM donations
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Set a donation's payment status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the donation doesn't exist.
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: &DonationId,
        status: DonationStatus,
    ) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;

        let result = sqlx::query("UPDATE donations SET status = ? WHERE id = ?")
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
