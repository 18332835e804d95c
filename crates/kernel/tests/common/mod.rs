#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Provides in-memory implementations of the repository traits so the suite
//! exercises the real tree-building and rendering code without PostgreSQL.

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use sentiero_kernel::menu::{MenuItemNode, build_tree};
use sentiero_kernel::models::{Menu, MenuItem};
use sentiero_kernel::repository::{MenuItemRepository, MenuRepository};

/// In-memory menu repository over a fixed menu list.
pub struct InMemoryMenuRepository {
    menus: Vec<Menu>,
}

impl InMemoryMenuRepository {
    pub fn new(menus: Vec<Menu>) -> Self {
        Self { menus }
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn all(&self) -> Result<Vec<Menu>> {
        Ok(self.menus.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Menu>> {
        Ok(self.menus.iter().find(|m| m.id == id).cloned())
    }
}

/// In-memory menu item repository over a fixed item list.
pub struct InMemoryMenuItemRepository {
    items: Vec<MenuItem>,
}

impl InMemoryMenuItemRepository {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryMenuItemRepository {
    async fn all_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItem>> {
        let mut items: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|i| i.menu_id == menu_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| (i.position, i.created));
        Ok(items)
    }

    async fn tree_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItemNode>> {
        let items = self.all_for_menu(menu_id).await?;
        Ok(build_tree(items))
    }
}

/// Build a menu fixture.
pub fn menu(name: &str) -> Menu {
    Menu {
        id: Uuid::now_v7(),
        name: name.to_string(),
        created: 0,
        changed: 0,
    }
}

/// Build a menu item fixture.
pub fn item(
    menu_id: Uuid,
    parent_id: Option<Uuid>,
    title: &str,
    uri: &str,
    url: &str,
    position: i32,
) -> MenuItem {
    MenuItem {
        id: Uuid::now_v7(),
        menu_id,
        parent_id,
        title: title.to_string(),
        uri: uri.to_string(),
        url: url.to_string(),
        target: None,
        position,
        created: 0,
        changed: 0,
    }
}
