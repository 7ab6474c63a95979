//! Database migrations

use anyhow::Context;
use sqlx::{migrate::Migrator, AnyPool};
use tracing::info;

/// Schema migrations embedded from the crate's `migrations` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
pub async fn run_migrations(pool: &AnyPool) -> anyhow::Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("database migrations failed")?;
    info!("database migrations applied");
    Ok(())
}
