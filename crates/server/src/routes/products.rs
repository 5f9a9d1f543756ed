//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use shopdesk_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::product::{Product, ProductInput};
use crate::state::AppState;

const ENTITY: &str = "Product";

/// Create a product. Any `id` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool()).create(&input).await?;
    tracing::info!(product_id = %product.id, "Product created");
    Ok(Json(product))
}

/// List every product.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Get a single product.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    ProductRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(ENTITY))
}

/// Replace every field of an existing product.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .update(id, &input)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;

    tracing::info!(product_id = %product.id, "Product updated");
    Ok(Json(product))
}

/// Delete a product, returning the record as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .delete(id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;

    tracing::info!(product_id = %product.id, "Product deleted");
    Ok(Json(product))
}
