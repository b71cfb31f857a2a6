//! Two-phase pruning of the navigation tree.

use loomerp_auth::PermissionMatrix;

use crate::menu::MenuNode;
use crate::routes::{RouteTable, can_access_route};

/// Prune `nodes` to what `matrix` may see.
///
/// Phase 1 walks depth-first: links are kept iff their route is accessible,
/// submenus are kept iff any child survives (a branch with no visible
/// leaves is itself invisible). Phase 2 sweeps the surviving list once,
/// left to right, and drops headings with no following content before the
/// next heading.
///
/// A heading's fate depends on the siblings *after* it — information a
/// depth-first walk does not have while descending into unrelated subtrees —
/// hence the second, list-scoped pass.
///
/// Sibling order is always preserved; filtering never reorders.
pub fn filter_menu(
    nodes: &[MenuNode],
    table: &RouteTable,
    matrix: &PermissionMatrix,
) -> Vec<MenuNode> {
    // Universal access short-circuits to an identical copy: every route is
    // accessible, so every link and submenu survives phase 1 and every
    // heading has surviving content after it. Observably the same as the
    // full walk, without the traversal.
    if matrix.has_universal_access() {
        return nodes.to_vec();
    }

    drop_orphan_headings(prune_inaccessible(nodes, table, matrix))
}

/// Phase 1: depth-first link/submenu pruning. Headings pass through
/// untouched; their fate is decided in phase 2.
fn prune_inaccessible(
    nodes: &[MenuNode],
    table: &RouteTable,
    matrix: &PermissionMatrix,
) -> Vec<MenuNode> {
    let mut kept = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            MenuNode::Heading { .. } => kept.push(node.clone()),
            MenuNode::Link { route, .. } => {
                if can_access_route(table, route, matrix) {
                    kept.push(node.clone());
                }
            }
            MenuNode::SubMenu {
                label,
                icon,
                children,
            } => {
                let children = prune_inaccessible(children, table, matrix);
                if !children.is_empty() {
                    kept.push(MenuNode::SubMenu {
                        label: label.clone(),
                        icon: icon.clone(),
                        children,
                    });
                }
            }
        }
    }

    kept
}

/// Phase 2: a heading is retained only if, scanning forward to the next
/// heading or end of list, at least one non-heading survivor exists.
///
/// Everything between a heading and the next one is non-heading by
/// construction, so the node immediately after a heading decides.
fn drop_orphan_headings(nodes: Vec<MenuNode>) -> Vec<MenuNode> {
    let mut kept = Vec::with_capacity(nodes.len());
    let mut iter = nodes.into_iter().peekable();

    while let Some(node) = iter.next() {
        if node.is_heading() {
            if iter.peek().is_some_and(|next| !next.is_heading()) {
                kept.push(node);
            }
        } else {
            kept.push(node);
        }
    }

    kept
}
