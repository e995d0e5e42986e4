//! User repository.
//!
//! Users originate from the identity provider; the upsert applies whatever
//! fields the provider shared and owns the owner-promotion rule.

use chrono::{DateTime, Utc};

use parish_core::{Email, Role, UserId};

use super::{Database, RepositoryError};
use crate::models::{User, UserUpsert};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for user queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: Option<String>,
    email: Option<String>,
    login_method: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
    last_signed_in: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = row.email.map(|e| Email::parse(&e)).transpose().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let role = row
            .role
            .parse::<Role>()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: UserId::new(row.id),
            name: row.name,
            email,
            login_method: row.login_method,
            role,
            created_at: row.created_at,
            last_signed_in: row.last_signed_in,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for user database operations.
pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub(crate) const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert or update a user record.
    ///
    /// Only provided fields overwrite existing values. When the caller sets
    /// no role, the configured owner id is promoted to admin; and an upsert
    /// with nothing else to change still refreshes `last_signed_in`, so
    /// repeat sign-ins leave a trace.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` if the query fails.
    pub async fn upsert(
        &self,
        user: &UserUpsert,
        owner_id: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let pool = self.db.write_pool()?;
        let now = Utc::now();

        let is_owner = owner_id.is_some_and(|owner| owner == user.id.as_str());
        let role = user
            .role
            .or(if is_owner { Some(Role::Admin) } else { None });

        let refresh_only = user.name.is_none()
            && user.email.is_none()
            && user.login_method.is_none()
            && user.last_signed_in.is_none()
            && role.is_none();
        let last_signed_in = if refresh_only {
            Some(now)
        } else {
            user.last_signed_in
        };

        sqlx::query(
            r"
            INSERT INTO users (id, name, email, login_method, role, created_at, last_signed_in)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = COALESCE(excluded.name, name),
                email = COALESCE(excluded.email, email),
                login_method = COALESCE(excluded.login_method, login_method),
                role = COALESCE(?, role),
                last_signed_in = COALESCE(?, last_signed_in)
            ",
        )
        .bind(user.id.as_str())
        .bind(user.name.as_deref())
        .bind(user.email.as_ref().map(Email::as_str))
        .bind(user.login_method.as_deref())
        .bind(role.unwrap_or_default().as_str())
        .bind(now)
        .bind(last_signed_in.unwrap_or(now))
        .bind(role.map(Role::as_str))
        .bind(last_signed_in)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let Some(pool) = self.db.read_pool() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, name, email, login_method, role, created_at, last_signed_in
            FROM users
            WHERE id = ?
            ",
        )
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Update a user's role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    /// Returns `RepositoryError::Unavailable` when storage is not
    /// configured, `RepositoryError::Database` for other database errors.
    pub async fn update_role(&self, id: &UserId, role: Role) -> Result<User, RepositoryError> {
        let pool = self.db.write_pool()?;

        let row = sqlx::query_as::<_, UserRow>(
            r"
            UPDATE users
            SET role = ?
            WHERE id = ?
            RETURNING id, name, email, login_method, role, created_at, last_signed_in
            ",
        )
        .bind(role.as_str())
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }
}
