//! Idempotent schema initialization.
//!
//! Run once at process start (and by `vetaris-cli init-db`). Every statement
//! is a no-op when the object already exists, so repeated startups against a
//! live database are safe.

use sqlx::PgPool;

use super::RepositoryError;

const CREATE_USERS: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        email VARCHAR(255) UNIQUE NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        is_admin BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

const CREATE_SESSIONS: &str = r"
    CREATE TABLE IF NOT EXISTS sessions (
        token VARCHAR(255) PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        expires_at TIMESTAMPTZ NOT NULL
    )
";

const CREATE_PRODUCTS: &str = r"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        price NUMERIC(10, 2) NOT NULL CHECK (price >= 0),
        image TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        category VARCHAR(100) NOT NULL DEFAULT 'General',
        stock INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0),
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

const CREATE_ORDERS: &str = r"
    CREATE TABLE IF NOT EXISTS orders (
        id SERIAL PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(id),
        total_amount NUMERIC(10, 2) NOT NULL,
        status VARCHAR(50) NOT NULL DEFAULT 'Preparing',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

const CREATE_ORDER_ITEMS: &str = r"
    CREATE TABLE IF NOT EXISTS order_items (
        id SERIAL PRIMARY KEY,
        order_id INTEGER NOT NULL REFERENCES orders(id),
        product_id INTEGER NOT NULL,
        product_name VARCHAR(255) NOT NULL,
        quantity INTEGER NOT NULL,
        price_at_purchase NUMERIC(10, 2) NOT NULL
    )
";

const CREATE_POSTS: &str = r"
    CREATE TABLE IF NOT EXISTS posts (
        id SERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        slug VARCHAR(255) UNIQUE NOT NULL,
        content TEXT NOT NULL,
        image TEXT NOT NULL DEFAULT '',
        summary TEXT NOT NULL DEFAULT '',
        is_published BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

/// Columns added after the initial deployment; `ADD COLUMN IF NOT EXISTS`
/// upgrades older databases in place.
const UPGRADES: &[&str] = &[
    "ALTER TABLE users ADD COLUMN IF NOT EXISTS is_admin BOOLEAN NOT NULL DEFAULT FALSE",
    "ALTER TABLE products ADD COLUMN IF NOT EXISTS is_active BOOLEAN NOT NULL DEFAULT TRUE",
];

/// Create all tables and columns if absent.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any statement fails.
pub async fn init_schema(pool: &PgPool) -> Result<(), RepositoryError> {
    let statements = [
        CREATE_USERS,
        CREATE_SESSIONS,
        CREATE_PRODUCTS,
        CREATE_ORDERS,
        CREATE_ORDER_ITEMS,
        CREATE_POSTS,
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    for statement in UPGRADES {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("database schema initialized");
    Ok(())
}
