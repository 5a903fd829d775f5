//! User account records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use vetaris_core::{Email, UserId};

/// A registered user account.
///
/// The password hash is intentionally not part of this record; only
/// `UserRepository::get_password_hash` ever surfaces it, and only to the
/// auth service.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// The authenticated identity attached to a request.
///
/// Produced by `AuthService::authenticate` from a live session row and
/// consumed by the policy extractors. Never cached across requests.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: Email,
    pub is_admin: bool,
}
