//! Vetaris API server library.
//!
//! The binary in `main.rs` is a thin wrapper; everything it wires together
//! lives here so the router can also be driven in-process by tests.
//!
//! # Architecture
//!
//! - Axum router with a declarative route table ([`routes`])
//! - Cookie-based session authentication backed by `PostgreSQL` ([`services::auth`],
//!   [`middleware`])
//! - Typed repositories over sqlx ([`db`]) returning [`models`] records
//! - Static assets for non-`/api` paths served via `tower_http::services::ServeDir`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the full application router: API routes, health probes, and the
/// static-asset fallback for non-`/api` paths.
#[must_use]
pub fn app(state: AppState) -> Router {
    let public_dir = state.config().public_dir.clone();

    Router::new()
        .route("/health", get(routes::health))
        .route("/health/ready", get(routes::readiness))
        .nest("/api", routes::api_routes())
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
