//! Product catalog route handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use vetaris_core::ProductId;

use crate::db::products::ProductRepository;
use crate::error::{ApiError, ApiJson, Result};
use crate::middleware::auth::RequireAdmin;
use crate::models::Product;
use crate::models::product::{NewProduct, ProductPatch};
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Include soft-deleted products (the admin panel's catalog view).
    #[serde(default)]
    pub include_inactive: bool,
}

/// List products.
///
/// GET /api/products
///
/// Active products in insertion order by default; `?include_inactive=true`
/// returns the whole catalog including soft-deleted rows.
///
/// # Errors
///
/// 500 if the query fails.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list(query.include_inactive)
        .await?;

    Ok(Json(products))
}

/// Get a single product by id.
///
/// GET /api/products/{id}
///
/// Soft-deleted products resolve here too, so items in historical orders
/// stay dereferenceable.
///
/// # Errors
///
/// 404 for an unknown id.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or(ApiError::NotFound("product"))?;

    Ok(Json(product))
}

/// Create a product.
///
/// POST /api/products
///
/// # Errors
///
/// 400 for a negative price or stock, 403 for non-admins.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewProduct>,
) -> Result<impl IntoResponse> {
    validate_new(&body)?;

    let product = ProductRepository::new(state.pool()).create(body).await?;

    tracing::info!(product_id = %product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Apply a partial update to a product.
///
/// PUT /api/products/{id}
///
/// Only the fields present in the body change; an empty body returns the
/// record untouched. Unknown fields are rejected with 400 before any write.
///
/// # Errors
///
/// 400 for unknown fields or negative values, 404 for an unknown id.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    ApiJson(patch): ApiJson<ProductPatch>,
) -> Result<Json<Product>> {
    validate_patch(&patch)?;

    let product = ProductRepository::new(state.pool()).update(id, patch).await?;

    Ok(Json(product))
}

/// Soft-delete a product.
///
/// DELETE /api/products/{id}
///
/// The row is retained for order history and stays reachable via
/// `?include_inactive=true`.
///
/// # Errors
///
/// 404 for an unknown id.
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    ProductRepository::new(state.pool()).soft_delete(id).await?;

    tracing::info!(product_id = %id, "product soft-deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn validate_new(new: &NewProduct) -> Result<()> {
    if new.name.trim().is_empty() {
        return Err(ApiError::Validation("name must not be empty".to_owned()));
    }
    if new.price.is_sign_negative() {
        return Err(ApiError::Validation("price must not be negative".to_owned()));
    }
    if new.stock.is_some_and(|stock| stock < 0) {
        return Err(ApiError::Validation("stock must not be negative".to_owned()));
    }
    Ok(())
}

fn validate_patch(patch: &ProductPatch) -> Result<()> {
    if patch.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Err(ApiError::Validation("name must not be empty".to_owned()));
    }
    if patch.price.is_some_and(|price| price.is_sign_negative()) {
        return Err(ApiError::Validation("price must not be negative".to_owned()));
    }
    if patch.stock.is_some_and(|stock| stock < 0) {
        return Err(ApiError::Validation("stock must not be negative".to_owned()));
    }
    Ok(())
}
