//! Navigation items

use serde::{Deserialize, Serialize};

use crate::fragment::extract_link_fragment;

/// Display state of a leaf item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// What the page tells us about one navigation entry, before parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSource {
    /// The entry carries the section header marker
    pub is_header: bool,
    /// `href` of the first link inside the entry, if any
    #[serde(default)]
    pub href: Option<String>,
}

impl ItemSource {
    /// A section header linking to `href`
    pub fn header(href: impl Into<String>) -> Self {
        Self {
            is_header: true,
            href: Some(href.into()),
        }
    }

    /// A leaf entry linking to `href`
    pub fn leaf(href: impl Into<String>) -> Self {
        Self {
            is_header: false,
            href: Some(href.into()),
        }
    }

    /// A leaf entry without any link
    pub fn bare_leaf() -> Self {
        Self::default()
    }
}

/// A parsed navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavItem {
    /// Top-level collapsible entry. Always shown.
    SectionHeader {
        selected: bool,
        fragment: Option<String>,
    },
    /// Entry nested under the closest preceding header
    Leaf {
        visibility: Visibility,
        fragment: Option<String>,
    },
}

impl NavItem {
    /// Decide the item kind once, from the markup facts
    pub fn parse(source: &ItemSource) -> Self {
        let fragment = extract_link_fragment(source.href.as_deref());
        if source.is_header {
            NavItem::SectionHeader {
                selected: false,
                fragment,
            }
        } else {
            NavItem::Leaf {
                visibility: Visibility::Visible,
                fragment,
            }
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, NavItem::SectionHeader { .. })
    }

    /// Fragment of the item's own link
    pub fn fragment(&self) -> Option<&str> {
        match self {
            NavItem::SectionHeader { fragment, .. } | NavItem::Leaf { fragment, .. } => {
                fragment.as_deref()
            }
        }
    }

    /// Selection marker; always false for leaves
    pub fn is_selected(&self) -> bool {
        matches!(self, NavItem::SectionHeader { selected: true, .. })
    }

    /// Leaf visibility; `None` for headers
    pub fn visibility(&self) -> Option<Visibility> {
        match self {
            NavItem::Leaf { visibility, .. } => Some(*visibility),
            NavItem::SectionHeader { .. } => None,
        }
    }
}
