//! CLI command implementations.

pub mod admin;
pub mod schema;
pub mod seed;

use sqlx::PgPool;
use thiserror::Error;

use vetaris_server::ServerConfig;
use vetaris_server::config::ConfigError;
use vetaris_server::db::RepositoryError;
use vetaris_server::services::auth::AuthError;

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// A repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// An auth operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Load configuration and open a pool, the same way the server does.
pub async fn connect() -> Result<PgPool, CliError> {
    let config = ServerConfig::from_env()?;

    tracing::info!("connecting to database...");
    let pool = vetaris_server::db::create_pool(&config.database_url).await?;

    Ok(pool)
}
