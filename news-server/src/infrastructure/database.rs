use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::infrastructure::config::AppConfig;

pub async fn create_pool(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(&config.database_url)
        .await
        .context("failed to open the news database pool")?;
    info!(
        max_connections = config.db_max_connections,
        "news database pool ready"
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!()
        .run(pool)
        .await
        .context("failed to apply the news schema migrations")?;
    info!("news schema up to date");
    Ok(())
}
