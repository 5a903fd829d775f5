//! Product repository for database operations.

use sqlx::PgPool;

use vetaris_core::ProductId;

use super::RepositoryError;
use crate::models::Product;
use crate::models::product::{NewProduct, ProductPatch};

const PRODUCT_COLUMNS: &str =
    "id, name, price, image, description, category, stock, is_active, created_at";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products in insertion order.
    ///
    /// Soft-deleted products are excluded unless `include_inactive` is set.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            r"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE is_active = TRUE OR $1
            ORDER BY id
            ",
        ))
        .bind(include_inactive)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a product by id, active or not: soft-deleted rows stay
    /// addressable for order history.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Create a product, applying catalog defaults for omitted fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: NewProduct) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r"
            INSERT INTO products (name, price, image, description, category, stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PRODUCT_COLUMNS}
            ",
        ))
        .bind(new.name)
        .bind(new.price)
        .bind(new.image.unwrap_or_default())
        .bind(new.description.unwrap_or_default())
        .bind(new.category.unwrap_or_else(|| "General".to_owned()))
        .bind(new.stock.unwrap_or(0))
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Apply a partial update.
    ///
    /// Only fields present in the patch change; the SQL text is static and
    /// `COALESCE` keeps the stored value wherever the bind is NULL, so an
    /// empty patch reads back the current record unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r"
            UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                image = COALESCE($4, image),
                description = COALESCE($5, description),
                category = COALESCE($6, category),
                stock = COALESCE($7, stock),
                is_active = COALESCE($8, is_active)
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            ",
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.price)
        .bind(patch.image)
        .bind(patch.description)
        .bind(patch.category)
        .bind(patch.stock)
        .bind(patch.is_active)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound("product"))?;

        Ok(product)
    }

    /// Soft-delete a product: mark it inactive, keep the row for order
    /// history.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn soft_delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("product"));
        }

        Ok(())
    }
}
