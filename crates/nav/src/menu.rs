use serde::{Deserialize, Serialize};

/// One node of the navigation tree.
///
/// Trees are defined once as static configuration and never mutated:
/// filtering produces a new pruned sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuNode {
    /// Section label with no route of its own.
    Heading { label: String },

    /// Navigable entry.
    Link {
        label: String,
        route: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },

    /// Collapsible group of child nodes.
    SubMenu {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    pub fn heading(label: impl Into<String>) -> Self {
        MenuNode::Heading {
            label: label.into(),
        }
    }

    pub fn link(label: impl Into<String>, route: impl Into<String>) -> Self {
        MenuNode::Link {
            label: label.into(),
            route: route.into(),
            icon: None,
        }
    }

    pub fn link_with_icon(
        label: impl Into<String>,
        route: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        MenuNode::Link {
            label: label.into(),
            route: route.into(),
            icon: Some(icon.into()),
        }
    }

    pub fn submenu(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::SubMenu {
            label: label.into(),
            icon: None,
            children,
        }
    }

    pub fn submenu_with_icon(
        label: impl Into<String>,
        icon: impl Into<String>,
        children: Vec<MenuNode>,
    ) -> Self {
        MenuNode::SubMenu {
            label: label.into(),
            icon: Some(icon.into()),
            children,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuNode::Heading { label }
            | MenuNode::Link { label, .. }
            | MenuNode::SubMenu { label, .. } => label,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, MenuNode::Heading { .. })
    }
}
