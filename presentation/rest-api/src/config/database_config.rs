use anyhow::Context;
use persistence::db::{DEFAULT_MAX_CONNECTIONS, DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::env;

/// Initialize database connection pool and apply pending migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: directory with SQL migrations (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::required("DATABASE_URL")?;
    let max_connections = env::parsed_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS);
    let migrations_path = env::or_default("MIGRATIONS_PATH", "./migrations");

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config)
        .await
        .context("failed to connect to the database")?;

    run_migrations(&pool, &migrations_path)
        .await
        .with_context(|| format!("failed to run migrations from {}", migrations_path))?;

    Ok(pool)
}
