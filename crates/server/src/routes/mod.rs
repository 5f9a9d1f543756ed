//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//! GET    /health/ready         - Readiness check (database)
//!
//! # Users
//! POST   /users/               - Create user
//! GET    /users/               - List users
//! GET    /users/{id}/          - Get user
//! PUT    /users/{id}/          - Replace user
//! DELETE /users/{id}/          - Delete user (returns prior state)
//!
//! # Products
//! POST   /products/            - Create product
//! GET    /products/            - List products
//! GET    /products/{id}/       - Get product
//! PUT    /products/{id}/       - Replace product
//! DELETE /products/{id}/       - Delete product
//!
//! # Orders
//! POST   /orders/              - Create order
//! GET    /orders/              - List orders
//! GET    /orders/{id}/         - Get order
//! PUT    /orders/{id}/         - Replace order
//! DELETE /orders/{id}/         - Delete order
//! ```

pub mod health;
pub mod orders;
pub mod products;
pub mod users;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(users::index).post(users::create))
        .route(
            "/users/{id}/",
            get(users::show).put(users::update).delete(users::delete),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products/", get(products::index).post(products::create))
        .route(
            "/products/{id}/",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders/", get(orders::index).post(orders::create))
        .route(
            "/orders/{id}/",
            get(orders::show).put(orders::update).delete(orders::delete),
        )
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(product_routes())
        .merge(order_routes())
}
