//! Postgres-backed repositories, delegating to the model queries.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::menu::{MenuItemNode, tree};
use crate::models::{Menu, MenuItem};

use super::{MenuItemRepository, MenuRepository};

/// Menu reads against PostgreSQL.
#[derive(Debug, Clone)]
pub struct PostgresMenuRepository {
    pool: PgPool,
}

impl PostgresMenuRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PostgresMenuRepository {
    async fn all(&self) -> Result<Vec<Menu>> {
        Menu::all(&self.pool).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<Menu>> {
        Menu::find_by_id(&self.pool, id).await
    }
}

/// Menu item reads against PostgreSQL.
#[derive(Debug, Clone)]
pub struct PostgresMenuItemRepository {
    pool: PgPool,
}

impl PostgresMenuItemRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PostgresMenuItemRepository {
    async fn all_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItem>> {
        MenuItem::find_by_menu(&self.pool, menu_id).await
    }

    async fn tree_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItemNode>> {
        let items = self.all_for_menu(menu_id).await?;
        Ok(tree::build_tree(items))
    }
}
