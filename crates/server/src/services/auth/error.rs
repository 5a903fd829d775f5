//! Authentication error types.

use thiserror::Error;

use vetaris_core::EmailError;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately one variant for both,
    /// so responses can't be used to enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration hit the unique email constraint.
    #[error("an account with this email already exists")]
    UserAlreadyExists,

    /// The email failed structural validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password doesn't meet requirements.
    #[error("{0}")]
    WeakPassword(String),

    /// Hashing the password failed.
    #[error("password hashing failed")]
    PasswordHash,

    /// A repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
