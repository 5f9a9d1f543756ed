//! Order domain types.

use serde::{Deserialize, Serialize};

use shopdesk_core::{OrderId, ProductId, UserId};

/// A stored order.
///
/// `user_id` and `product_id` are not checked against existing rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Free-form text, stored verbatim.
    pub order_date: String,
    pub status: String,
}

/// Request body for creating or replacing an order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderInput {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub order_date: String,
    pub status: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_input_from_json() {
        let input: OrderInput = serde_json::from_value(json!({
            "user_id": 999,
            "product_id": 3,
            "order_date": "2024-01-01",
            "status": "new"
        }))
        .unwrap();

        assert_eq!(input.user_id, UserId::new(999));
        assert_eq!(input.product_id, ProductId::new(3));
    }

    #[test]
    fn test_order_input_rejects_string_ids() {
        let result: Result<OrderInput, _> = serde_json::from_value(json!({
            "user_id": "abc",
            "product_id": 3,
            "order_date": "2024-01-01",
            "status": "new"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_order_serializes_ids_as_integers() {
        let order = Order {
            id: OrderId::new(2),
            user_id: UserId::new(999),
            product_id: ProductId::new(3),
            order_date: "2024-01-01".to_string(),
            status: "new".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "id": 2,
                "user_id": 999,
                "product_id": 3,
                "order_date": "2024-01-01",
                "status": "new"
            })
        );
    }
}
