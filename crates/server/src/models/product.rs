//! Product domain types.

use serde::{Deserialize, Serialize};

use shopdesk_core::ProductId;

/// A stored product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Integer amount; the unit is up to the client.
    pub price: i64,
}

/// Request body for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_input_rejects_fractional_price() {
        let result: Result<ProductInput, _> = serde_json::from_value(json!({
            "name": "Lamp",
            "description": "Desk lamp",
            "price": 12.5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_product_serializes_with_id() {
        let product = Product {
            id: ProductId::new(4),
            name: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            price: 1299,
        };

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": 4, "name": "Lamp", "description": "Desk lamp", "price": 1299})
        );
    }
}
