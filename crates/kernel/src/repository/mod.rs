//! Repository contracts for menu reads.
//!
//! The navigation core consumes menus through these traits and never mutates
//! them (mutation belongs to the admin subsystem, which works against the
//! models directly). Two implementations exist per trait: the Postgres-backed
//! repository and a memoizing decorator wrapping it. The `bind_*` factories
//! choose between them once, at construction, from the cache flag.

mod cache;
mod postgres;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::menu::MenuItemNode;
use crate::models::{Menu, MenuItem};

pub use cache::{CachingMenuItemRepository, CachingMenuRepository};
pub use postgres::{PostgresMenuItemRepository, PostgresMenuRepository};

/// Read access to menus.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All persisted menus, ordered by name.
    async fn all(&self) -> Result<Vec<Menu>>;

    /// A single menu, or `None` when the id is unknown.
    async fn find(&self, id: Uuid) -> Result<Option<Menu>>;
}

/// Read access to menu items.
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Flat item list for a menu, in sibling order.
    async fn all_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItem>>;

    /// Ordered item forest for a menu. A menu with no items yields an empty
    /// forest, not an error.
    async fn tree_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItemNode>>;
}

/// Bind the menu repository, wrapping it in the caching decorator when
/// caching is enabled.
pub fn bind_menu_repository(pool: PgPool, cache_enabled: bool) -> Arc<dyn MenuRepository> {
    let repository = PostgresMenuRepository::new(pool);

    if !cache_enabled {
        return Arc::new(repository);
    }

    Arc::new(CachingMenuRepository::new(repository))
}

/// Bind the menu item repository, wrapping it in the caching decorator when
/// caching is enabled.
pub fn bind_menu_item_repository(
    pool: PgPool,
    cache_enabled: bool,
) -> Arc<dyn MenuItemRepository> {
    let repository = PostgresMenuItemRepository::new(pool);

    if !cache_enabled {
        return Arc::new(repository);
    }

    Arc::new(CachingMenuItemRepository::new(repository))
}
