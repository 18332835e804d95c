//! Menu system: tree assembly and navigation rendering.
//!
//! At boot, every persisted menu is fetched, its item forest assembled from
//! the flat parent/child rows, and the forest rendered into a named
//! navigation structure consumed by templates and the HTTP API.

pub mod render;
pub mod tree;

pub use render::{boot, register_menus, render_item};
pub use tree::{MenuItemNode, build_tree};
