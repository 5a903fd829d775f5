//! Product catalog records and write shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use vetaris_core::ProductId;

/// A catalog product.
///
/// Products are soft-deleted: `is_active = false` removes them from the
/// default listing while the row stays referenceable from historical order
/// items. Prices serialize as decimal strings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
    pub category: String,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a product.
///
/// Optional fields fall back to the catalog defaults (empty image and
/// description, category "General", stock 0, active).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
}

/// Partial update for a product.
///
/// The field set is the complete allow-list of mutable columns; unknown keys
/// are rejected during deserialization, so a request can never name a column
/// outside this list. Absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
}

impl ProductPatch {
    /// True when no field is set; the update is then a no-op read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.stock.is_none()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result = serde_json::from_str::<ProductPatch>(r#"{"is_admin": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_patch_deserializes_empty() {
        let patch: ProductPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_partial_patch_keeps_other_fields_unset() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price": "19.90"}"#).unwrap();
        assert!(!patch.is_empty());
        assert_eq!(patch.price.unwrap().to_string(), "19.90");
        assert!(patch.name.is_none());
        assert!(patch.is_active.is_none());
    }

    #[test]
    fn test_price_accepts_json_numbers() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        assert_eq!(patch.price.unwrap(), Decimal::new(125, 1));
    }

    #[test]
    fn test_product_serializes_price_as_string() {
        let product = Product {
            id: 1.into(),
            name: "Kedi Maması".to_owned(),
            price: Decimal::new(4990, 2),
            image: String::new(),
            description: String::new(),
            category: "General".to_owned(),
            stock: 10,
            is_active: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!("49.90"));
    }
}
