//! Memoizing repository decorators.
//!
//! Each decorator wraps an inner repository and caches every read method,
//! keyed by the method's arguments (one typed map per method). The decorator
//! is selected once at bind time; there is no TTL or invalidation — menu data
//! changes rarely and staleness until restart is tolerated.

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::menu::MenuItemNode;
use crate::models::{Menu, MenuItem};

use super::{MenuItemRepository, MenuRepository};

/// Caching decorator for [`MenuRepository`].
pub struct CachingMenuRepository<R> {
    inner: R,
    /// Memo for `all()` (no arguments, one slot).
    all: RwLock<Option<Vec<Menu>>>,
    /// Memo for `find(id)`.
    find: DashMap<Uuid, Option<Menu>>,
}

impl<R: MenuRepository> CachingMenuRepository<R> {
    /// Wrap an inner repository.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            all: RwLock::new(None),
            find: DashMap::new(),
        }
    }
}

#[async_trait]
impl<R: MenuRepository> MenuRepository for CachingMenuRepository<R> {
    async fn all(&self) -> Result<Vec<Menu>> {
        {
            let cached = self.all.read();
            if let Some(menus) = cached.as_ref() {
                debug!("menu repository cache hit: all");
                return Ok(menus.clone());
            }
        }

        let menus = self.inner.all().await?;
        *self.all.write() = Some(menus.clone());

        Ok(menus)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Menu>> {
        if let Some(menu) = self.find.get(&id) {
            debug!(%id, "menu repository cache hit: find");
            return Ok(menu.clone());
        }

        let menu = self.inner.find(id).await?;
        self.find.insert(id, menu.clone());

        Ok(menu)
    }
}

/// Caching decorator for [`MenuItemRepository`].
pub struct CachingMenuItemRepository<R> {
    inner: R,
    /// Memo for `all_for_menu(menu_id)`.
    items: DashMap<Uuid, Vec<MenuItem>>,
    /// Memo for `tree_for_menu(menu_id)`.
    trees: DashMap<Uuid, Vec<MenuItemNode>>,
}

impl<R: MenuItemRepository> CachingMenuItemRepository<R> {
    /// Wrap an inner repository.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            items: DashMap::new(),
            trees: DashMap::new(),
        }
    }
}

#[async_trait]
impl<R: MenuItemRepository> MenuItemRepository for CachingMenuItemRepository<R> {
    async fn all_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItem>> {
        if let Some(items) = self.items.get(&menu_id) {
            debug!(%menu_id, "menu item repository cache hit: all_for_menu");
            return Ok(items.clone());
        }

        let items = self.inner.all_for_menu(menu_id).await?;
        self.items.insert(menu_id, items.clone());

        Ok(items)
    }

    async fn tree_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItemNode>> {
        if let Some(tree) = self.trees.get(&menu_id) {
            debug!(%menu_id, "menu item repository cache hit: tree_for_menu");
            return Ok(tree.clone());
        }

        let tree = self.inner.tree_for_menu(menu_id).await?;
        self.trees.insert(menu_id, tree.clone());

        Ok(tree)
    }
}
