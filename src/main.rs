//! Payments API server
//!
//! Reads configuration, connects to PostgreSQL, ensures the schema and
//! serves the payment routes until SIGTERM or Ctrl+C.

use anyhow::{Context, Result};
use payments::prelude::*;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(config.database.connect_options()?)
        .await
        .context("Could not connect to the database")?;

    ensure_schema(&pool).await?;
    tracing::info!("Database schema ready");

    ServerBuilder::new()
        .with_repository(PostgresPaymentRepository::new(pool))
        .with_config(config.server)
        .serve()
        .await
}
