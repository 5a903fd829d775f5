//! Administrator account management commands.
//!
//! The admin flag has no write path through the HTTP surface; these
//! commands are the out-of-band seeding mechanism.

use vetaris_core::Email;
use vetaris_server::db::users::UserRepository;
use vetaris_server::services::auth::{AuthError, AuthService};

use super::CliError;

/// Create an admin account with the given credentials, or promote the
/// existing account if the email is already registered.
///
/// # Errors
///
/// Returns `CliError` for invalid input or database failures.
pub async fn create(email: &str, password: &str) -> Result<(), CliError> {
    let pool = super::connect().await?;

    match AuthService::new(&pool).register(email, password).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "account created");
        }
        Err(AuthError::UserAlreadyExists) => {
            tracing::warn!("account already exists, promoting it");
        }
        Err(e) => return Err(e.into()),
    }

    let parsed = Email::parse(email).map_err(AuthError::from)?;
    UserRepository::new(&pool).set_admin(&parsed, true).await?;

    tracing::info!(email, "admin flag granted");
    Ok(())
}

/// Promote an existing account to admin.
///
/// # Errors
///
/// Returns `CliError::Repository` with not-found if no such account exists.
pub async fn grant(email: &str) -> Result<(), CliError> {
    let pool = super::connect().await?;

    let parsed = Email::parse(email).map_err(AuthError::from)?;
    UserRepository::new(&pool).set_admin(&parsed, true).await?;

    tracing::info!(email, "admin flag granted");
    Ok(())
}
