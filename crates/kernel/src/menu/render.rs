//! Menu rendering into navigation structures.

use anyhow::Result;
use tracing::{debug, info};

use crate::menu::MenuItemNode;
use crate::models::SiteConfig;
use crate::navigation::{NavBuilder, Navigation};
use crate::repository::{MenuItemRepository, MenuRepository};
use crate::state::AppState;

/// Render one item (and its subtree) into the builder.
///
/// An item with children becomes a dropdown named after its title, filled by
/// rendering every child into the nested builder. A leaf becomes a link whose
/// href is the item's `uri` when non-empty, else its `url`.
pub fn render_item(node: &MenuItemNode, builder: &mut NavBuilder) {
    if node.is_branch() {
        builder.dropdown(&node.item.title, |sub| {
            for child in &node.children {
                render_item(child, sub);
            }
        });
    } else {
        builder.url(
            node.item.link_target(),
            &node.item.title,
            node.item.target.as_deref(),
        );
    }
}

/// Render every persisted menu into a named navigation structure.
pub async fn register_menus(
    menus: &dyn MenuRepository,
    items: &dyn MenuItemRepository,
    navigation: &Navigation,
) -> Result<()> {
    for menu in menus.all().await? {
        let forest = items.tree_for_menu(menu.id).await?;
        debug!(menu = %menu.name, roots = forest.len(), "registering menu");

        navigation.create(&menu.name, |builder| {
            for node in &forest {
                render_item(node, builder);
            }
        });
    }

    Ok(())
}

/// Register all persisted menus at boot.
///
/// Skipped entirely while the site reports not installed; menus appear on the
/// next start after installation completes.
pub async fn boot(state: &AppState) -> Result<()> {
    let installed = SiteConfig::is_installed(state.db()).await.unwrap_or(false);
    if !installed {
        info!("site not installed, skipping menu registration");
        return Ok(());
    }

    register_menus(state.menus(), state.menu_items(), state.navigation()).await?;
    info!(menus = state.navigation().len(), "menus registered");

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use uuid::Uuid;

    use crate::menu::tree::build_tree;
    use crate::models::MenuItem;
    use crate::navigation::NavEntry;

    use super::*;

    fn item(
        id: Uuid,
        parent_id: Option<Uuid>,
        title: &str,
        uri: &str,
        url: &str,
    ) -> MenuItem {
        MenuItem {
            id,
            menu_id: Uuid::nil(),
            parent_id,
            title: title.to_string(),
            uri: uri.to_string(),
            url: url.to_string(),
            target: None,
            position: 0,
            created: 0,
            changed: 0,
        }
    }

    fn render_all(items: Vec<MenuItem>) -> Vec<NavEntry> {
        let forest = build_tree(items);
        let mut builder = NavBuilder::new();
        for node in &forest {
            render_item(node, &mut builder);
        }
        builder.into_entries()
    }

    #[test]
    fn leaf_with_uri_ignores_url() {
        let entries = render_all(vec![item(
            Uuid::now_v7(),
            None,
            "Home",
            "/",
            "https://elsewhere.example",
        )]);

        assert_eq!(
            entries,
            vec![NavEntry::Link {
                title: "Home".to_string(),
                href: "/".to_string(),
                target: None,
            }]
        );
    }

    #[test]
    fn leaf_with_empty_uri_uses_url() {
        let entries = render_all(vec![item(
            Uuid::now_v7(),
            None,
            "External",
            "",
            "https://example.com",
        )]);

        assert_eq!(
            entries,
            vec![NavEntry::Link {
                title: "External".to_string(),
                href: "https://example.com".to_string(),
                target: None,
            }]
        );
    }

    #[test]
    fn leaf_carries_target_attribute() {
        let mut blank = item(Uuid::now_v7(), None, "Docs", "/docs", "");
        blank.target = Some("_blank".to_string());
        let entries = render_all(vec![blank]);

        assert_eq!(
            entries,
            vec![NavEntry::Link {
                title: "Docs".to_string(),
                href: "/docs".to_string(),
                target: Some("_blank".to_string()),
            }]
        );
    }

    #[test]
    fn branch_renders_dropdown_with_children_in_order() {
        let parent = Uuid::now_v7();
        let entries = render_all(vec![
            item(parent, None, "Docs", "", ""),
            item(Uuid::now_v7(), Some(parent), "Guide", "/guide", ""),
            item(Uuid::now_v7(), Some(parent), "Reference", "/reference", ""),
        ]);

        assert_eq!(
            entries,
            vec![NavEntry::Dropdown {
                title: "Docs".to_string(),
                children: vec![
                    NavEntry::Link {
                        title: "Guide".to_string(),
                        href: "/guide".to_string(),
                        target: None,
                    },
                    NavEntry::Link {
                        title: "Reference".to_string(),
                        href: "/reference".to_string(),
                        target: None,
                    },
                ],
            }]
        );
    }

    #[test]
    fn nested_branches_render_nested_dropdowns() {
        let root = Uuid::now_v7();
        let child = Uuid::now_v7();
        let entries = render_all(vec![
            item(root, None, "Docs", "", ""),
            item(child, Some(root), "Guides", "", ""),
            item(Uuid::now_v7(), Some(child), "Install", "/install-guide", ""),
        ]);

        let NavEntry::Dropdown { children, .. } = &entries[0] else {
            panic!("expected a dropdown");
        };
        let NavEntry::Dropdown {
            title, children, ..
        } = &children[0]
        else {
            panic!("expected a nested dropdown");
        };
        assert_eq!(title, "Guides");
        assert_eq!(
            children[0],
            NavEntry::Link {
                title: "Install".to_string(),
                href: "/install-guide".to_string(),
                target: None,
            }
        );
    }

    #[test]
    fn mixed_menu_renders_links_and_dropdowns_together() {
        // Menu "main": Home -> "/", Docs (branch) containing Guide -> "/guide".
        let home = Uuid::now_v7();
        let docs = Uuid::now_v7();
        let guide = Uuid::now_v7();
        let entries = render_all(vec![
            item(home, None, "Home", "/", ""),
            item(docs, None, "Docs", "", ""),
            item(guide, Some(docs), "Guide", "/guide", ""),
        ]);

        assert_eq!(
            entries,
            vec![
                NavEntry::Link {
                    title: "Home".to_string(),
                    href: "/".to_string(),
                    target: None,
                },
                NavEntry::Dropdown {
                    title: "Docs".to_string(),
                    children: vec![NavEntry::Link {
                        title: "Guide".to_string(),
                        href: "/guide".to_string(),
                        target: None,
                    }],
                },
            ]
        );
    }

    #[test]
    fn empty_forest_renders_empty_navigation() {
        assert!(render_all(Vec::new()).is_empty());
    }
}
