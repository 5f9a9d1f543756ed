//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! shopdesk-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPDESK_DATABASE_URL` - SQLite connection string (falls back to
//!   `DATABASE_URL`, then `sqlite://shopdesk.db?mode=rwc`)
//!
//! # Migration Files
//!
//! Migrations live in `crates/server/migrations/` and are embedded into the
//! server library at compile time.

use shopdesk_server::config::{ConfigError, ServerConfig};
use shopdesk_server::db::{self, RepositoryError};

/// Errors from the migrate command.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] RepositoryError),
}

/// Apply all pending migrations to the configured database.
///
/// # Errors
///
/// Returns `MigrationError` if configuration is invalid, the database cannot
/// be opened, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url, 1).await?;

    let embedded = db::MIGRATOR.iter().count();
    tracing::info!(embedded, "Running migrations...");
    db::run_migrations(&pool).await?;

    pool.close().await;
    tracing::info!("Migrations complete!");
    Ok(())
}
