//! Order route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use vetaris_core::{OrderId, OrderStatus};

use crate::db::orders::OrderRepository;
use crate::error::{ApiError, ApiJson, Result};
use crate::middleware::auth::{RequireAdmin, RequireSession};
use crate::models::order::{AdminOrderWithItems, NewOrder, Order, OrderWithItems};
use crate::state::AppState;

/// Response for a created order.
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub order_id: OrderId,
}

/// Request body for a status update.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// List the caller's own orders, newest first, items nested.
///
/// GET /api/orders
///
/// # Errors
///
/// 401 without a valid session.
pub async fn list_own(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderWithItems>>> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(user.user_id)
        .await?;

    Ok(Json(orders))
}

/// Create an order for the caller.
///
/// POST /api/orders
///
/// The order row and all item snapshots are written in one transaction;
/// nothing persists if any part fails. Prices and the total are taken from
/// the request as-is.
///
/// # Errors
///
/// 400 for an empty cart, non-positive quantities, or negative amounts.
pub async fn create(
    RequireSession(user): RequireSession,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewOrder>,
) -> Result<impl IntoResponse> {
    validate_order(&body)?;

    let order = OrderRepository::new(state.pool())
        .create(user.user_id, &body.items, body.total)
        .await?;

    tracing::info!(order_id = %order.id, user_id = %user.user_id, "order created");

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse { order_id: order.id }),
    ))
}

/// List every order with the buyer's email, newest first.
///
/// GET /api/admin/orders
///
/// # Errors
///
/// 401 without a session, 403 without the admin flag.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminOrderWithItems>>> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;

    Ok(Json(orders))
}

/// Update an order's status.
///
/// PUT /api/admin/orders/{id}/status
///
/// # Errors
///
/// 400 for an empty status, 404 for an unknown order.
pub async fn update_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    ApiJson(body): ApiJson<UpdateStatusRequest>,
) -> Result<Json<Order>> {
    if body.status.trim().is_empty() {
        return Err(ApiError::Validation("status must not be empty".to_owned()));
    }

    let status = OrderStatus::new(body.status);
    let order = OrderRepository::new(state.pool())
        .update_status(id, &status)
        .await?;

    tracing::info!(order_id = %id, status = %status, "order status updated");

    Ok(Json(order))
}

fn validate_order(order: &NewOrder) -> Result<()> {
    if order.items.is_empty() {
        return Err(ApiError::Validation(
            "order must contain at least one item".to_owned(),
        ));
    }
    if order.total.is_sign_negative() {
        return Err(ApiError::Validation("total must not be negative".to_owned()));
    }
    for item in &order.items {
        if item.quantity < 1 {
            return Err(ApiError::Validation(
                "item quantity must be at least 1".to_owned(),
            ));
        }
        if item.price.is_sign_negative() {
            return Err(ApiError::Validation(
                "item price must not be negative".to_owned(),
            ));
        }
    }
    Ok(())
}
