//! Menu tree assembly.
//!
//! Builds an ordered forest of menu items from the flat, self-referencing
//! row list in a single grouping pass: rows are bucketed by `parent_id`,
//! then children are attached recursively starting from the roots.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::models::MenuItem;

/// A menu item with its ordered children attached.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemNode {
    /// The item record.
    #[serde(flatten)]
    pub item: MenuItem,

    /// Ordered child nodes.
    pub children: Vec<MenuItemNode>,
}

impl MenuItemNode {
    /// Whether this node renders as a dropdown rather than a plain link.
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Build an ordered forest from a flat item list.
///
/// Input order is preserved among siblings (callers pass rows already in
/// sibling order). Rows whose parent chain never reaches a root (missing
/// parent or parent cycle) are excluded from the forest and logged. Each
/// parent bucket is consumed at most once, so the walk cannot recurse
/// unboundedly on cyclic data.
pub fn build_tree(items: Vec<MenuItem>) -> Vec<MenuItemNode> {
    let mut by_parent: HashMap<Option<Uuid>, Vec<MenuItem>> = HashMap::new();
    for item in items {
        by_parent.entry(item.parent_id).or_default().push(item);
    }

    let roots = by_parent.remove(&None).unwrap_or_default();
    let forest = attach_children(roots, &mut by_parent);

    let unreachable: usize = by_parent.values().map(Vec::len).sum();
    if unreachable > 0 {
        warn!(
            count = unreachable,
            "menu items unreachable from any root (missing parent or cycle), excluded from tree"
        );
    }

    forest
}

/// Attach children to each item, consuming the matching parent bucket.
fn attach_children(
    items: Vec<MenuItem>,
    by_parent: &mut HashMap<Option<Uuid>, Vec<MenuItem>>,
) -> Vec<MenuItemNode> {
    items
        .into_iter()
        .map(|item| {
            let children = by_parent
                .remove(&Some(item.id))
                .map(|group| attach_children(group, by_parent))
                .unwrap_or_default();

            MenuItemNode { item, children }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn item(id: Uuid, parent_id: Option<Uuid>, title: &str) -> MenuItem {
        MenuItem {
            id,
            menu_id: Uuid::nil(),
            parent_id,
            title: title.to_string(),
            uri: String::new(),
            url: String::new(),
            target: None,
            position: 0,
            created: 0,
            changed: 0,
        }
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        assert!(build_tree(Vec::new()).is_empty());
    }

    #[test]
    fn roots_keep_input_order() {
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();
        let forest = build_tree(vec![item(a, None, "A"), item(b, None, "B")]);

        let titles: Vec<&str> = forest.iter().map(|n| n.item.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert!(forest.iter().all(|n| !n.is_branch()));
    }

    #[test]
    fn children_attach_under_parent_in_order() {
        let root = Uuid::now_v7();
        let c1 = Uuid::now_v7();
        let c2 = Uuid::now_v7();
        let forest = build_tree(vec![
            item(root, None, "Root"),
            item(c1, Some(root), "First"),
            item(c2, Some(root), "Second"),
        ]);

        assert_eq!(forest.len(), 1);
        let root_node = &forest[0];
        assert!(root_node.is_branch());
        let titles: Vec<&str> = root_node
            .children
            .iter()
            .map(|n| n.item.title.as_str())
            .collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn grandchildren_nest_recursively() {
        let root = Uuid::now_v7();
        let child = Uuid::now_v7();
        let grandchild = Uuid::now_v7();
        let forest = build_tree(vec![
            item(root, None, "Root"),
            item(child, Some(root), "Child"),
            item(grandchild, Some(child), "Grandchild"),
        ]);

        let child_node = &forest[0].children[0];
        assert_eq!(child_node.children.len(), 1);
        assert_eq!(child_node.children[0].item.title, "Grandchild");
    }

    #[test]
    fn orphan_rows_are_excluded() {
        let root = Uuid::now_v7();
        let missing_parent = Uuid::now_v7();
        let orphan = Uuid::now_v7();
        let forest = build_tree(vec![
            item(root, None, "Root"),
            item(orphan, Some(missing_parent), "Orphan"),
        ]);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].item.title, "Root");
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn cyclic_rows_do_not_recurse_forever() {
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();
        let root = Uuid::now_v7();
        // a and b reference each other; neither is reachable from a root.
        let forest = build_tree(vec![
            item(root, None, "Root"),
            item(a, Some(b), "A"),
            item(b, Some(a), "B"),
        ]);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].item.title, "Root");
    }

    #[test]
    fn self_referencing_row_is_excluded() {
        let a = Uuid::now_v7();
        let forest = build_tree(vec![item(a, Some(a), "Self")]);
        assert!(forest.is_empty());
    }
}
