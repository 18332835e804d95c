//! Database connection pool management and schema bootstrap.

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

/// Create a PostgreSQL connection pool.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    Ok(pool)
}

/// Check if the database connection is healthy.
pub async fn check_health(pool: &PgPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}

/// Create the schema if it does not exist yet.
///
/// Idempotent, so a fresh database bootstraps without a migration runner.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS site_config (
            key TEXT PRIMARY KEY,
            value JSONB NOT NULL,
            updated TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create site_config table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS menu (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            created BIGINT NOT NULL,
            changed BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create menu table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS menu_item (
            id UUID PRIMARY KEY,
            menu_id UUID NOT NULL REFERENCES menu(id),
            parent_id UUID REFERENCES menu_item(id),
            title TEXT NOT NULL,
            uri TEXT NOT NULL DEFAULT '',
            url TEXT NOT NULL DEFAULT '',
            target TEXT,
            position INTEGER NOT NULL DEFAULT 0,
            created BIGINT NOT NULL,
            changed BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create menu_item table")?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS menu_item_menu_idx ON menu_item (menu_id, position, created)",
    )
    .execute(pool)
    .await
    .context("failed to create menu_item index")?;

    Ok(())
}
