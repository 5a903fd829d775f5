//! Session repository for database operations.
//!
//! Tokens are stored verbatim; expiry is enforced at validation time by the
//! caller via [`crate::models::Session::is_valid_at`], never cached. Expired
//! rows are simply ignored and may be garbage-collected out-of-band.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use vetaris_core::{Email, SessionToken, UserId};

use super::RepositoryError;
use crate::models::Session;

/// A session row joined with its user, as needed for authentication.
#[derive(Debug, sqlx::FromRow)]
pub struct SessionWithUser {
    pub token: SessionToken,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub email: Email,
    pub is_admin: bool,
}

impl SessionWithUser {
    /// Split into the session record and user fields.
    #[must_use]
    pub fn into_parts(self) -> (Session, Email, bool) {
        (
            Session {
                token: self.token,
                user_id: self.user_id,
                created_at: self.created_at,
                expires_at: self.expires_at,
            },
            self.email,
            self.is_admin,
        )
    }
}

/// Repository for session database operations.
pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new session row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// the negligible-probability token collision).
    pub async fn create(
        &self,
        token: &SessionToken,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO sessions (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Look up a session by token, joined with its user.
    ///
    /// Returns the row regardless of expiry; the caller applies the clock
    /// check so the boundary semantics live in exactly one place.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_user(
        &self,
        token: &SessionToken,
    ) -> Result<Option<SessionWithUser>, RepositoryError> {
        let row = sqlx::query_as::<_, SessionWithUser>(
            r"
            SELECT s.token, s.user_id, s.created_at, s.expires_at, u.email, u.is_admin
            FROM sessions s
            JOIN users u ON s.user_id = u.id
            WHERE s.token = $1
            ",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a session row. Idempotent: unknown tokens are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, token: &SessionToken) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
