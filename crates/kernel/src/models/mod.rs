//! Database models.

pub mod menu;
pub mod menu_item;
pub mod site_config;

pub use menu::{CreateMenu, Menu, UpdateMenu};
pub use menu_item::{CreateMenuItem, MenuItem, UpdateMenuItem};
pub use site_config::SiteConfig;
