//! Order repository for database operations.
//!
//! Order creation is the one multi-statement write in the system: the header
//! row and every item row commit together or not at all. Item rows are
//! immutable snapshots once written.

use sqlx::PgPool;

use vetaris_core::{OrderId, OrderStatus, UserId};

use super::RepositoryError;
use crate::models::order::{
    AdminOrderSummary, AdminOrderWithItems, NewOrderItem, Order, OrderItem, OrderWithItems,
};

const ORDER_COLUMNS: &str = "id, user_id, total_amount, status, created_at";
const ITEM_COLUMNS: &str = "id, order_id, product_id, product_name, quantity, price_at_purchase";

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an order and all of its items as one atomic unit.
    ///
    /// The transaction rolls back on any item-insert failure, so an order
    /// row without items can never be observed. Callers validate the item
    /// list is non-empty before reaching here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails.
    pub async fn create(
        &self,
        user_id: UserId,
        items: &[NewOrderItem],
        total: rust_decimal::Decimal,
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r"
            INSERT INTO orders (user_id, total_amount)
            VALUES ($1, $2)
            RETURNING {ORDER_COLUMNS}
            ",
        ))
        .bind(user_id)
        .bind(total)
        .fetch_one(&mut *tx)
        .await?;

        for item in items {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, product_name, quantity, price_at_purchase)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(order.id)
            .bind(item.id)
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order)
    }

    /// List a user's own orders, newest first, with items nested.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<OrderWithItems>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            r"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.items_for(order.id).await?;
            result.push(OrderWithItems { order, items });
        }

        Ok(result)
    }

    /// List every order with the buyer's email, newest first, with items
    /// nested. Admin view.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_all(&self) -> Result<Vec<AdminOrderWithItems>, RepositoryError> {
        let orders = sqlx::query_as::<_, AdminOrderSummary>(
            r"
            SELECT o.id, o.user_id, u.email AS user_email,
                   o.total_amount, o.status, o.created_at
            FROM orders o
            JOIN users u ON o.user_id = u.id
            ORDER BY o.created_at DESC, o.id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.items_for(order.id).await?;
            result.push(AdminOrderWithItems { order, items });
        }

        Ok(result)
    }

    /// Update an order's status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: &OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            r"
            UPDATE orders SET status = $2
            WHERE id = $1
            RETURNING {ORDER_COLUMNS}
            ",
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound("order"))?;

        Ok(order)
    }

    /// Fetch the items belonging to one order, in insertion order.
    async fn items_for(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(&format!(
            r"
            SELECT {ITEM_COLUMNS}
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            ",
        ))
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}
