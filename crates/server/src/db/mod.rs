//! Database operations for the Shopdesk SQLite store.
//!
//! # Tables
//!
//! - `users` - Registered users (email is unique)
//! - `products` - Catalog entries
//! - `orders` - Orders referencing a user and a product
//!
//! Foreign keys from `orders` are declared in the schema but not enforced:
//! every connection is opened with `PRAGMA foreign_keys = OFF`.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/`, embedded into the
//! binary, and run via:
//! ```bash
//! cargo run -p shopdesk-cli -- migrate
//! ```
//! or on server startup when `SHOPDESK_AUTO_MIGRATE=true`.

pub mod orders;
pub mod products;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Applying the embedded schema failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create a SQLite connection pool.
///
/// The database file is created if it does not exist. Foreign key checks are
/// disabled on every connection.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (wrapped in `SecretString`)
/// * `max_connections` - Upper bound on pooled connections (at least 1)
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be established.
pub async fn create_pool(
    database_url: &SecretString,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create a private in-memory database pool.
///
/// Every in-memory SQLite connection is its own database, so the pool holds
/// exactly one connection that is never recycled. Used for tests and
/// throwaway instances.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_in_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
}

/// Apply all pending embedded migrations.
///
/// # Errors
///
/// Returns `RepositoryError::Migration` if a migration fails or the recorded
/// history does not match the embedded files.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), RepositoryError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Check that the database answers queries.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn ping(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
