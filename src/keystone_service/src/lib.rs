mod account_service;
pub mod tracing;

pub use account_service::{AccountService, ServiceSetupError};

use keystone_adapters::config::DatabaseSettings;
use keystone_adapters::persistence::{connect, run_migrations};
use secrecy::Secret;
use sqlx::PgPool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    #[error("Failed to connect to PostgreSQL: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect to PostgreSQL and bring the schema up to date.
pub async fn configure_postgresql(
    url: &Secret<String>,
    settings: &DatabaseSettings,
) -> Result<PgPool, DatabaseSetupError> {
    let pool = connect(url, settings).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
