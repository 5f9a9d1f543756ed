//! Order repository for database operations.
//!
//! `user_id` and `product_id` are written as given. Nothing checks that the
//! referenced user or product exists.

use sqlx::SqlitePool;

use shopdesk_core::OrderId;

use super::RepositoryError;
use crate::models::order::{Order, OrderInput};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an order and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &OrderInput) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (user_id, product_id, order_date, status)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, product_id, order_date, status
            ",
        )
        .bind(input.user_id)
        .bind(input.product_id)
        .bind(&input.order_date)
        .bind(&input.status)
        .fetch_one(self.pool)
        .await?;

        Ok(order)
    }

    /// List all orders in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, product_id, order_date, status
            FROM orders
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, product_id, order_date, status
            FROM orders
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Replace every field of an order. Returns `None` if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: OrderId,
        input: &OrderInput,
    ) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            UPDATE orders
            SET user_id = ?, product_id = ?, order_date = ?, status = ?
            WHERE id = ?
            RETURNING id, user_id, product_id, order_date, status
            ",
        )
        .bind(input.user_id)
        .bind(input.product_id)
        .bind(&input.order_date)
        .bind(&input.status)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Delete an order and return its prior state. Returns `None` if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            DELETE FROM orders
            WHERE id = ?
            RETURNING id, user_id, product_id, order_date, status
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }
}
