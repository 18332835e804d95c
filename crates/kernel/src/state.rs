//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::db;
use crate::navigation::Navigation;
use crate::repository::{
    MenuItemRepository, MenuRepository, bind_menu_item_repository, bind_menu_repository,
};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// PostgreSQL connection pool.
    db: PgPool,

    /// Menu repository, wrapped in the caching decorator when enabled.
    menus: Arc<dyn MenuRepository>,

    /// Menu item repository, wrapped in the caching decorator when enabled.
    menu_items: Arc<dyn MenuItemRepository>,

    /// Rendered navigation structures, populated at boot.
    navigation: Navigation,
}

impl AppState {
    /// Initialize application state: connect to the database, ensure the
    /// schema exists, and bind the repositories per the cache flag.
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = db::create_pool(config)
            .await
            .context("failed to create database pool")?;

        db::ensure_schema(&pool)
            .await
            .context("failed to ensure database schema")?;

        info!(cache = config.cache_enabled, "binding menu repositories");

        Ok(Self::with_pool(pool, config.cache_enabled))
    }

    /// Build state around an existing pool, binding repositories per the
    /// cache flag.
    pub fn with_pool(pool: PgPool, cache_enabled: bool) -> Self {
        let menus = bind_menu_repository(pool.clone(), cache_enabled);
        let menu_items = bind_menu_item_repository(pool.clone(), cache_enabled);

        Self {
            inner: Arc::new(AppStateInner {
                db: pool,
                menus,
                menu_items,
                navigation: Navigation::new(),
            }),
        }
    }

    /// PostgreSQL connection pool.
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Menu repository.
    pub fn menus(&self) -> &dyn MenuRepository {
        self.inner.menus.as_ref()
    }

    /// Menu item repository.
    pub fn menu_items(&self) -> &dyn MenuItemRepository {
        self.inner.menu_items.as_ref()
    }

    /// Rendered navigation registry.
    pub fn navigation(&self) -> &Navigation {
        &self.inner.navigation
    }

    /// Check PostgreSQL reachability.
    pub async fn postgres_healthy(&self) -> bool {
        db::check_health(self.db()).await
    }
}
