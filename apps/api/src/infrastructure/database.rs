// Connection pool setup and embedded schema migrations

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Opens a PostgreSQL pool sized from the configuration
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.database_max_connections,
        "Connecting to database..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connected successfully");
    Ok(pool)
}

/// Applies the migrations embedded from `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
