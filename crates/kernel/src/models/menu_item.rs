//! Menu item model.
//!
//! One node in a menu tree. Items form a forest rooted at rows with a null
//! `parent_id`, scoped to a single menu. Sibling order is the persisted
//! `position` column, not incidental storage order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Menu item record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MenuItem {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// Menu this item belongs to.
    pub menu_id: Uuid,

    /// Optional parent item for hierarchy.
    pub parent_id: Option<Uuid>,

    /// Display title.
    pub title: String,

    /// Internal path (e.g., "/guide"). Preferred over `url` when non-empty.
    pub uri: String,

    /// External URL, used when `uri` is empty.
    pub url: String,

    /// Link target attribute (e.g., "_blank").
    pub target: Option<String>,

    /// Sibling sort position (lower = earlier).
    pub position: i32,

    /// Unix timestamp when created.
    pub created: i64,

    /// Unix timestamp when last changed.
    pub changed: i64,
}

impl MenuItem {
    /// The destination a rendered link points at: `uri` when non-empty,
    /// otherwise `url`.
    pub fn link_target(&self) -> &str {
        if self.uri.is_empty() {
            &self.url
        } else {
            &self.uri
        }
    }
}

/// Input for creating a menu item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenuItem {
    pub menu_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    pub uri: Option<String>,
    pub url: Option<String>,
    pub target: Option<String>,
    pub position: Option<i32>,
}

/// Input for updating a menu item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMenuItem {
    pub parent_id: Option<Option<Uuid>>,
    pub title: Option<String>,
    pub uri: Option<String>,
    pub url: Option<String>,
    pub target: Option<Option<String>>,
    pub position: Option<i32>,
}

impl MenuItem {
    /// Create a new menu item.
    pub async fn create(pool: &PgPool, input: CreateMenuItem) -> Result<Self> {
        let id = Uuid::now_v7();
        let now = chrono::Utc::now().timestamp();
        let uri = input.uri.unwrap_or_default();
        let url = input.url.unwrap_or_default();
        let position = input.position.unwrap_or(0);

        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            INSERT INTO menu_item (id, menu_id, parent_id, title, uri, url, target, position, created, changed)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, menu_id, parent_id, title, uri, url, target, position, created, changed
            "#,
        )
        .bind(id)
        .bind(input.menu_id)
        .bind(input.parent_id)
        .bind(&input.title)
        .bind(&uri)
        .bind(&url)
        .bind(&input.target)
        .bind(position)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
        .context("failed to create menu item")?;

        Ok(item)
    }

    /// Find a menu item by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let item = sqlx::query_as::<_, MenuItem>(
            "SELECT id, menu_id, parent_id, title, uri, url, target, position, created, changed FROM menu_item WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch menu item by id")?;

        Ok(item)
    }

    /// Find all items for a menu in sibling order.
    pub async fn find_by_menu(pool: &PgPool, menu_id: Uuid) -> Result<Vec<Self>> {
        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, menu_id, parent_id, title, uri, url, target, position, created, changed
            FROM menu_item
            WHERE menu_id = $1
            ORDER BY position ASC, created ASC
            "#,
        )
        .bind(menu_id)
        .fetch_all(pool)
        .await
        .context("failed to fetch menu items by menu")?;

        Ok(items)
    }

    /// Update a menu item.
    pub async fn update(pool: &PgPool, id: Uuid, input: UpdateMenuItem) -> Result<Option<Self>> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let now = chrono::Utc::now().timestamp();

        let parent_id = input.parent_id.unwrap_or(existing.parent_id);
        let title = input.title.unwrap_or(existing.title);
        let uri = input.uri.unwrap_or(existing.uri);
        let url = input.url.unwrap_or(existing.url);
        let target = input.target.unwrap_or(existing.target);
        let position = input.position.unwrap_or(existing.position);

        let updated = sqlx::query_as::<_, MenuItem>(
            r#"
            UPDATE menu_item
            SET parent_id = $1, title = $2, uri = $3, url = $4, target = $5,
                position = $6, changed = $7
            WHERE id = $8
            RETURNING id, menu_id, parent_id, title, uri, url, target, position, created, changed
            "#,
        )
        .bind(parent_id)
        .bind(&title)
        .bind(&uri)
        .bind(&url)
        .bind(&target)
        .bind(position)
        .bind(now)
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to update menu item")?;

        Ok(updated)
    }

    /// Delete a menu item.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM menu_item WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .context("failed to delete menu item")?;

        Ok(result.rows_affected() > 0)
    }

    /// Count items in a menu.
    pub async fn count_by_menu(pool: &PgPool, menu_id: Uuid) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM menu_item WHERE menu_id = $1")
                .bind(menu_id)
                .fetch_one(pool)
                .await
                .context("failed to count menu items")?;

        Ok(count)
    }
}
