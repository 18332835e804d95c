//! Site configuration model for installation status.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Site configuration record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SiteConfig {
    /// Configuration key.
    pub key: String,

    /// Configuration value (JSON).
    pub value: serde_json::Value,

    /// When this config was last updated.
    pub updated: chrono::DateTime<chrono::Utc>,
}

impl SiteConfig {
    /// Get a configuration value by key.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<serde_json::Value>> {
        let result = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT value FROM site_config WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(pool)
        .await
        .context("failed to get site config")?;

        Ok(result)
    }

    /// Set a configuration value.
    pub async fn set(pool: &PgPool, key: &str, value: serde_json::Value) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO site_config (key, value, updated)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET value = $2, updated = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(pool)
        .await
        .context("failed to set site config")?;

        Ok(())
    }

    /// Check if the site is installed.
    ///
    /// Menu registration is skipped entirely while this is false.
    pub async fn is_installed(pool: &PgPool) -> Result<bool> {
        let value = Self::get(pool, "installed").await?;
        Ok(value.map(|v| v.as_bool().unwrap_or(false)).unwrap_or(false))
    }

    /// Mark the site as installed.
    pub async fn mark_installed(pool: &PgPool) -> Result<()> {
        Self::set(pool, "installed", serde_json::json!(true)).await
    }
}
