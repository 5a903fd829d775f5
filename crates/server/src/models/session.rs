//! Session records.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use vetaris_core::{SessionToken, UserId};

/// Sessions live for 30 days from creation.
pub const SESSION_TTL_DAYS: i64 = 30;

/// A persisted login session.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is still valid at `now`.
    ///
    /// The boundary is inclusive: a session authenticates at exactly
    /// `expires_at` and fails once `now` is strictly past it. Validation
    /// always re-checks against the clock; nothing caches the result.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at >= now
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;
    use vetaris_core::SessionToken;

    fn session_expiring_at(expires_at: DateTime<Utc>) -> Session {
        Session {
            token: SessionToken::new("t"),
            user_id: 1.into(),
            created_at: expires_at - Duration::days(SESSION_TTL_DAYS),
            expires_at,
        }
    }

    #[test]
    fn test_valid_before_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now + Duration::hours(1));
        assert!(session.is_valid_at(now));
    }

    #[test]
    fn test_valid_at_exact_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now);
        assert!(session.is_valid_at(now));
    }

    #[test]
    fn test_invalid_after_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now - Duration::seconds(1));
        assert!(!session.is_valid_at(now));
    }
}
