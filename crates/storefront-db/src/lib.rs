//! # Storefront DB
//!
//! Database pool and maintenance utilities for the storefront schema.
//!
//! This crate provides PostgreSQL pool initialization, the embedded schema
//! migrations, and table clearing used before regenerating seed data.
//!
//! # Example
//!
//! ```ignore
//! use storefront_config::DatabaseConfig;
//! use storefront_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), storefront_core::DatagenError> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgExecutor, migrate::Migrator};
use storefront_config::DatabaseConfig;
use storefront_core::DatagenError;
use tracing::{info, warn};

/// Schema migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Initializes a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns a configuration error when no `DATABASE_URL` was configured, or the
/// connection error when the database cannot be reached.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, DatagenError> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await?;

    Ok(pool)
}

/// Applies any pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatagenError> {
    info!("Applying schema migrations");
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Builds the `TRUNCATE` statement for `tables`. Identities restart so that
/// regenerated rows can reuse ids from 1.
pub fn truncate_statement(tables: &[&str]) -> String {
    let list = tables
        .iter()
        .map(|t| quote_ident(t))
        .collect::<Vec<_>>()
        .join(", ");
    format!("TRUNCATE TABLE {list} RESTART IDENTITY CASCADE")
}

/// Empties `tables` and restarts their identities.
pub async fn truncate_tables<'e, E>(executor: E, tables: &[&str]) -> Result<(), DatagenError>
where
    E: PgExecutor<'e>,
{
    if tables.is_empty() {
        return Ok(());
    }

    warn!(tables = tables.len(), "Truncating storefront tables");
    sqlx::query(&truncate_statement(tables))
        .execute(executor)
        .await?;
    Ok(())
}

/// Quotes a SQL identifier, doubling any embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("stores"), "\"stores\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_truncate_statement() {
        assert_eq!(
            truncate_statement(&["roles", "employees"]),
            "TRUNCATE TABLE \"roles\", \"employees\" RESTART IDENTITY CASCADE"
        );
    }

    #[tokio::test]
    async fn test_init_db_pool_requires_url() {
        let result = init_db_pool(&DatabaseConfig::default()).await;
        assert!(matches!(
            result,
            Err(DatagenError::Database(sqlx::Error::Configuration(_)))
        ));
    }
}
