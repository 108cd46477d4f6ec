use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.db?mode=rwc";
const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Initialize the local catalog database and bring its schema up to date
///
/// Environment variables:
/// - DATABASE_URL: SQLite connection string (default: "sqlite://catalog.db?mode=rwc")
/// - DATABASE_MIGRATIONS: Migrations directory (default: "infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let migrations =
        env::var("DATABASE_MIGRATIONS").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

    let pool = create_sqlite_pool(&DatabaseConfig::new(db_url)).await?;
    run_migrations(&pool, &migrations).await?;
    tracing::info!(migrations = %migrations, "local catalog database ready");
    Ok(pool)
}
