//! Navigation structures consumed by templates and the HTTP API.
//!
//! A [`Navigation`] registry maps menu names to rendered entry lists. Entries
//! are produced through a [`NavBuilder`], which mirrors the two operations a
//! menu walk needs: append a link, or open a named dropdown and fill it
//! through a nested builder.

use dashmap::DashMap;
use serde::Serialize;

/// One rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavEntry {
    /// A plain link.
    Link {
        /// Display label.
        title: String,
        /// Destination href.
        href: String,
        /// Optional link target attribute (e.g., "_blank").
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },

    /// A labelled group of child entries.
    Dropdown {
        /// Display label.
        title: String,
        /// Ordered child entries.
        children: Vec<NavEntry>,
    },
}

/// Collects entries for one navigation (or one dropdown within it).
#[derive(Debug, Default)]
pub struct NavBuilder {
    entries: Vec<NavEntry>,
}

impl NavBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a link entry.
    pub fn url(&mut self, href: &str, title: &str, target: Option<&str>) {
        self.entries.push(NavEntry::Link {
            title: title.to_string(),
            href: href.to_string(),
            target: target.map(str::to_string),
        });
    }

    /// Append a dropdown entry, filling it through a nested builder.
    pub fn dropdown(&mut self, title: &str, fill: impl FnOnce(&mut NavBuilder)) {
        let mut sub = NavBuilder::new();
        fill(&mut sub);
        self.entries.push(NavEntry::Dropdown {
            title: title.to_string(),
            children: sub.entries,
        });
    }

    /// Consume the builder, returning the collected entries.
    pub fn into_entries(self) -> Vec<NavEntry> {
        self.entries
    }
}

/// Registry of rendered navigations, keyed by menu name.
///
/// Populated once during boot; read concurrently by handlers afterwards.
#[derive(Debug, Default)]
pub struct Navigation {
    menus: DashMap<String, Vec<NavEntry>>,
}

impl Navigation {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) a named navigation, filling it through a builder.
    pub fn create(&self, name: &str, fill: impl FnOnce(&mut NavBuilder)) {
        let mut builder = NavBuilder::new();
        fill(&mut builder);
        self.menus.insert(name.to_string(), builder.into_entries());
    }

    /// Entries for a named navigation, if registered.
    pub fn get(&self, name: &str) -> Option<Vec<NavEntry>> {
        self.menus.get(name).map(|entries| entries.clone())
    }

    /// Sorted names of all registered navigations.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.menus.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of registered navigations.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Check if no navigations are registered.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
