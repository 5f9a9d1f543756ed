//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use shopdesk_core::OrderId;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::models::order::{Order, OrderInput};
use crate::state::AppState;

const ENTITY: &str = "Order";

/// Create an order. Any `id` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<OrderInput>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool()).create(&input).await?;
    tracing::info!(order_id = %order.id, "Order created");
    Ok(Json(order))
}

/// List every order.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders))
}

/// Get a single order.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>> {
    OrderRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(ENTITY))
}

/// Replace every field of an existing order.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(input): Json<OrderInput>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .update(id, &input)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;

    tracing::info!(order_id = %order.id, "Order updated");
    Ok(Json(order))
}

/// Delete an order, returning the record as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .delete(id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;

    tracing::info!(order_id = %order.id, "Order deleted");
    Ok(Json(order))
}
