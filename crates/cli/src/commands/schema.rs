//! Schema initialization command.
//!
//! Same routine the server runs at startup; exposed standalone so a
//! database can be prepared before first boot.

use vetaris_server::db::schema::init_schema;

use super::CliError;

/// Create all tables and columns if absent.
///
/// # Errors
///
/// Returns `CliError` if configuration is missing or a statement fails.
pub async fn init_db() -> Result<(), CliError> {
    let pool = super::connect().await?;

    init_schema(&pool).await?;

    tracing::info!("schema initialization complete");
    Ok(())
}
