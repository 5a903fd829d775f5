//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness probe
//! GET  /health/ready                    - Readiness probe (checks database)
//!
//! # Auth
//! POST /api/auth/register               - Create account          (public)
//! POST /api/auth/login                  - Verify credentials, set session cookie (public)
//! POST /api/auth/logout                 - Delete session, clear cookie (public)
//! GET  /api/auth/me                     - Current identity        (session)
//!
//! # Products
//! GET  /api/products                    - Active products; ?include_inactive=true for all (public)
//! GET  /api/products/{id}               - Single product, inactive included (public)
//! POST /api/products                    - Create product          (admin)
//! PUT  /api/products/{id}               - Partial update          (admin)
//! DELETE /api/products/{id}             - Soft delete             (admin)
//!
//! # Orders
//! GET  /api/orders                      - Caller's orders, items nested (session)
//! POST /api/orders                      - Create order for caller (session)
//! GET  /api/admin/orders                - All orders with buyer email (admin)
//! PUT  /api/admin/orders/{id}/status    - Update order status     (admin)
//!
//! # Blog
//! GET  /api/posts                       - Published posts         (public)
//! GET  /api/posts/{id_or_slug}          - Single published post   (public)
//! GET  /api/admin/posts                 - All posts, drafts included (admin)
//! POST /api/posts                       - Create post             (admin)
//! PUT  /api/posts/{id}                  - Partial update          (admin)
//! DELETE /api/posts/{id}                - Hard delete             (admin)
//! ```
//!
//! Unmatched `/api` paths return 404 `{"error": ...}`; everything outside
//! `/api` falls through to the static file service.

pub mod auth;
pub mod orders;
pub mod posts;
pub mod products;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` router: the full route table with per-route policy.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::get_one)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/orders", get(orders::list_own).post(orders::create))
        .route("/admin/orders", get(orders::list_all))
        .route("/admin/orders/{id}/status", put(orders::update_status))
        .route("/posts", get(posts::list_published).post(posts::create))
        .route(
            "/posts/{id_or_slug}",
            get(posts::get_one).put(posts::update).delete(posts::remove),
        )
        .route("/admin/posts", get(posts::list_all))
        .fallback(not_found)
}

/// 404 for unmatched API routes, in the standard error body shape.
async fn not_found() -> ApiError {
    ApiError::NotFound("route")
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
