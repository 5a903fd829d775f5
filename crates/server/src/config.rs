//! Server configuration loaded from environment variables.
//!
//! Configuration is read once at process start and handed to [`crate::AppState`]
//! by value; nothing else in the crate touches the environment.
//!
//! # Environment Variables
//!
//! ## Required
//! - `VETARIS_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//!
//! ## Optional
//! - `VETARIS_HOST` - Bind address (default: 127.0.0.1)
//! - `VETARIS_PORT` - Listen port (default: 8801)
//! - `VETARIS_PUBLIC_DIR` - Static asset directory (default: public)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory served for non-`/api` paths
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("VETARIS_DATABASE_URL")?;
        let host = get_env_or_default("VETARIS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VETARIS_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("VETARIS_PORT", "8801")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VETARIS_PORT".to_owned(), e.to_string()))?;
        let public_dir = PathBuf::from(get_env_or_default("VETARIS_PUBLIC_DIR", "public"));

        Ok(Self {
            database_url,
            host,
            port,
            public_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
