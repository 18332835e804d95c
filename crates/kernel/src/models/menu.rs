//! Menu model.
//!
//! A menu is one named navigation tree (e.g., "main", "footer"). Menus are
//! created and mutated by the external admin subsystem; the navigation core
//! only reads them at boot.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Menu record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Menu {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// Menu machine name (e.g., "main", "footer").
    pub name: String,

    /// Unix timestamp when created.
    pub created: i64,

    /// Unix timestamp when last changed.
    pub changed: i64,
}

/// Input for creating a menu.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenu {
    pub name: String,
}

/// Input for updating a menu.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMenu {
    pub name: Option<String>,
}

impl Menu {
    /// Create a new menu.
    pub async fn create(pool: &PgPool, input: CreateMenu) -> Result<Self> {
        let id = Uuid::now_v7();
        let now = chrono::Utc::now().timestamp();

        let menu = sqlx::query_as::<_, Menu>(
            r#"
            INSERT INTO menu (id, name, created, changed)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, created, changed
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
        .context("failed to create menu")?;

        Ok(menu)
    }

    /// Find a menu by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let menu = sqlx::query_as::<_, Menu>(
            "SELECT id, name, created, changed FROM menu WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch menu by id")?;

        Ok(menu)
    }

    /// Find a menu by its machine name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Self>> {
        let menu = sqlx::query_as::<_, Menu>(
            "SELECT id, name, created, changed FROM menu WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
        .context("failed to fetch menu by name")?;

        Ok(menu)
    }

    /// List all menus, ordered by name.
    pub async fn all(pool: &PgPool) -> Result<Vec<Self>> {
        let menus = sqlx::query_as::<_, Menu>(
            "SELECT id, name, created, changed FROM menu ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
        .context("failed to list menus")?;

        Ok(menus)
    }

    /// Update a menu.
    pub async fn update(pool: &PgPool, id: Uuid, input: UpdateMenu) -> Result<Option<Self>> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let now = chrono::Utc::now().timestamp();

        let name = input.name.unwrap_or(existing.name);

        let updated = sqlx::query_as::<_, Menu>(
            r#"
            UPDATE menu
            SET name = $1, changed = $2
            WHERE id = $3
            RETURNING id, name, created, changed
            "#,
        )
        .bind(&name)
        .bind(now)
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to update menu")?;

        Ok(updated)
    }

    /// Delete a menu and all of its items.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        sqlx::query("DELETE FROM menu_item WHERE menu_id = $1")
            .bind(id)
            .execute(pool)
            .await
            .context("failed to delete menu items for menu")?;

        let result = sqlx::query("DELETE FROM menu WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .context("failed to delete menu")?;

        Ok(result.rows_affected() > 0)
    }
}
