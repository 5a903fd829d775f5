//! Integration tests for Vetaris.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and the server
//! vetaris-cli init-db
//! vetaris-cli admin create -e admin@vetaris.com -p <admin password>
//! cargo run -p vetaris-server
//!
//! # Run integration tests (ignored by default)
//! VETARIS_ADMIN_PASSWORD=<admin password> \
//!     cargo test -p vetaris-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `VETARIS_BASE_URL` - Server base URL (default: `http://localhost:8801`)
//! - `VETARIS_ADMIN_EMAIL` - Seeded admin email (default: `admin@vetaris.com`)
//! - `VETARIS_ADMIN_PASSWORD` - Seeded admin password (required for admin tests)

use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("VETARIS_BASE_URL").unwrap_or_else(|_| "http://localhost:8801".to_owned())
}

/// Build a client with a cookie store, so the session cookie set at login
/// travels on every later request.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// A unique throwaway email for one test run.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@test.vetaris.example", Uuid::new_v4())
}

/// Register a fresh account and log it in, returning the authenticated
/// client and its email.
///
/// # Panics
///
/// Panics if registration or login fails.
pub async fn registered_client(prefix: &str) -> (Client, String) {
    let client = client();
    let email = unique_email(prefix);
    let base = base_url();

    let resp = client
        .post(format!("{base}/api/auth/register"))
        .json(&json!({"email": email, "password": "integration-pass"}))
        .send()
        .await
        .expect("register request failed");
    assert!(resp.status().is_success(), "registration failed");

    let resp = client
        .post(format!("{base}/api/auth/login"))
        .json(&json!({"email": email, "password": "integration-pass"}))
        .send()
        .await
        .expect("login request failed");
    assert!(resp.status().is_success(), "login failed");

    (client, email)
}

/// Log in as the seeded admin account.
///
/// Requires `vetaris-cli admin create` to have been run, with the password
/// exposed via `VETARIS_ADMIN_PASSWORD`.
///
/// # Panics
///
/// Panics if the admin login fails.
pub async fn admin_client() -> Client {
    let client = client();
    let base = base_url();
    let email =
        std::env::var("VETARIS_ADMIN_EMAIL").unwrap_or_else(|_| "admin@vetaris.com".to_owned());
    let password =
        std::env::var("VETARIS_ADMIN_PASSWORD").expect("VETARIS_ADMIN_PASSWORD must be set");

    let resp = client
        .post(format!("{base}/api/auth/login"))
        .json(&json!({"email": email, "password": password}))
        .send()
        .await
        .expect("admin login request failed");
    assert!(resp.status().is_success(), "admin login failed");

    client
}
