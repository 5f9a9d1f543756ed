//! User route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use shopdesk_core::UserId;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::models::user::{User, UserInput};
use crate::state::AppState;

const ENTITY: &str = "User";

/// Create a user. Any `id` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<Json<User>> {
    let user = UserRepository::new(state.pool()).create(&input).await?;
    tracing::info!(user_id = %user.id, "User created");
    Ok(Json(user))
}

/// List every user.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Get a single user.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<User>> {
    UserRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(ENTITY))
}

/// Replace every field of an existing user.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(input): Json<UserInput>,
) -> Result<Json<User>> {
    let user = UserRepository::new(state.pool())
        .update(id, &input)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;

    tracing::info!(user_id = %user.id, "User updated");
    Ok(Json(user))
}

/// Delete a user, returning the record as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<User>> {
    let user = UserRepository::new(state.pool())
        .delete(id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;

    tracing::info!(user_id = %user.id, "User deleted");
    Ok(Json(user))
}
