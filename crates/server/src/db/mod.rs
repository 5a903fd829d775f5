//! Database access for the Vetaris `PostgreSQL` store.
//!
//! # Tables
//!
//! - `users` - Accounts (email, argon2 hash, admin flag)
//! - `sessions` - Opaque login tokens with expiry
//! - `products` - Catalog (soft-deleted via `is_active`)
//! - `orders` / `order_items` - Orders with denormalized item snapshots
//! - `posts` - Blog posts addressed by id or slug
//!
//! The schema is created idempotently at startup (or via
//! `vetaris-cli init-db`); see [`schema`].
//!
//! Every repository borrows the pool, opens per-operation connections, and
//! returns typed records from [`crate::models`]. Multi-statement writes (order +
//! items) run inside a single transaction.

pub mod orders;
pub mod posts;
pub mod products;
pub mod schema;
pub mod sessions;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying query failed or the store is unreachable.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No row matched the given id or key. Carries the resource name for
    /// the client-facing message.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A unique constraint rejected the write.
    #[error("{0}")]
    Conflict(String),

    /// A stored value failed to parse into its typed form.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
