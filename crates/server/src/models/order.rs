//! Order records and write shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use vetaris_core::{Email, OrderId, OrderItemId, OrderStatus, ProductId, UserId};

/// An order header row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// A line item belonging to an order.
///
/// `product_name` and `price_at_purchase` are snapshots taken at checkout;
/// later edits to the product must never show through here.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i32,
    pub price_at_purchase: Decimal,
}

/// An order with its items nested, as returned to the buyer.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// An order header joined with the buyer's email, for the admin listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AdminOrderSummary {
    pub id: OrderId,
    pub user_id: UserId,
    pub user_email: Email,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// An admin order with its items nested.
#[derive(Debug, Clone, Serialize)]
pub struct AdminOrderWithItems {
    #[serde(flatten)]
    pub order: AdminOrderSummary,
    pub items: Vec<OrderItem>,
}

/// One line of an incoming order request.
///
/// The client sends the id, display name, unit price, and quantity it showed
/// at checkout; name and price are persisted verbatim as the snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewOrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// An incoming order request: the cart lines plus the client-computed total.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewOrder {
    pub items: Vec<NewOrderItem>,
    pub total: Decimal,
}
