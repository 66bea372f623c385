//! Navigation bar and sidebar tree.
//!
//! Every entry is declared by hand; nothing is generated from the docs
//! directory. A node is either a link or a group with at least one child,
//! so a label with no destination and no children cannot be built.
//!
//! # Example
//!
//! ```
//! use tresdocs_config::nav::NavItem;
//!
//! let guide = NavItem::group(
//!     "Guide",
//!     vec![
//!         NavItem::link("Introduction", "/guide/").unwrap(),
//!         NavItem::link("Getting Started", "/guide/getting-started").unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! let texts: Vec<_> = guide.walk().map(|(_, item)| item.text()).collect();
//! assert_eq!(texts, ["Guide", "Introduction", "Getting Started"]);
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("Invalid scheme regex"));

/// Whether a link stays inside the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Path routed by the site itself
    Internal,
    /// Absolute URL with a scheme, or protocol-relative
    External,
}

impl LinkKind {
    /// Classify a link by its shape.
    pub fn of(link: &str) -> Self {
        if link.starts_with("//") || SCHEME_RE.is_match(link) {
            Self::External
        } else {
            Self::Internal
        }
    }
}

/// A leaf entry pointing somewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    text: String,
    link: String,
}

/// A labelled group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    text: String,
    link: Option<String>,
    items: Vec<NavItem>,
}

/// A node in the navigation bar or sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavItem", into = "RawNavItem")]
pub enum NavItem {
    Link(NavLink),
    Group(NavGroup),
}

impl NavItem {
    /// Create a node from its wire fields.
    ///
    /// Produces a link when `items` is empty and a group otherwise.
    pub fn new(
        text: impl Into<String>,
        link: Option<String>,
        items: Vec<NavItem>,
    ) -> Result<Self, NavError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(NavError::BlankText);
        }

        match (link, items.is_empty()) {
            (Some(link), true) => Ok(Self::Link(NavLink { text, link })),
            (None, true) => Err(NavError::EmptyGroup(text)),
            (link, false) => Ok(Self::Group(NavGroup { text, link, items })),
        }
    }

    /// Create a leaf entry.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Result<Self, NavError> {
        Self::new(text, Some(link.into()), Vec::new())
    }

    /// Create a group header. `items` must not be empty.
    pub fn group(text: impl Into<String>, items: Vec<NavItem>) -> Result<Self, NavError> {
        let text = text.into();
        if items.is_empty() {
            return Err(NavError::EmptyGroup(text));
        }
        Self::new(text, None, items)
    }

    /// Create a group that is also a link itself.
    pub fn group_with_link(
        text: impl Into<String>,
        link: impl Into<String>,
        items: Vec<NavItem>,
    ) -> Result<Self, NavError> {
        let text = text.into();
        if items.is_empty() {
            return Err(NavError::EmptyGroup(text));
        }
        Self::new(text, Some(link.into()), items)
    }

    /// Display label.
    pub fn text(&self) -> &str {
        match self {
            Self::Link(l) => &l.text,
            Self::Group(g) => &g.text,
        }
    }

    /// Destination, if any.
    pub fn link_target(&self) -> Option<&str> {
        match self {
            Self::Link(l) => Some(&l.link),
            Self::Group(g) => g.link.as_deref(),
        }
    }

    /// Children in declared order. Empty for links.
    pub fn items(&self) -> &[NavItem] {
        match self {
            Self::Link(_) => &[],
            Self::Group(g) => &g.items,
        }
    }

    /// Whether the node has children.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Shape of the destination, if the node has one.
    pub fn link_kind(&self) -> Option<LinkKind> {
        self.link_target().map(LinkKind::of)
    }

    /// Pre-order walk over this node and all descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(std::slice::from_ref(self))
    }

    /// Nodes from `self` down to the first node linking to `path`.
    pub fn trail_to(&self, path: &str) -> Option<Vec<&NavItem>> {
        let target = normalize_path(path);
        let mut trail = Vec::new();
        if find_trail(self, &target, &mut trail) {
            Some(trail)
        } else {
            None
        }
    }
}

fn find_trail<'a>(item: &'a NavItem, target: &str, trail: &mut Vec<&'a NavItem>) -> bool {
    trail.push(item);

    if item.link_target().map(normalize_path).as_deref() == Some(target) {
        return true;
    }

    for child in item.items() {
        if find_trail(child, target, trail) {
            return true;
        }
    }

    trail.pop();
    false
}

/// Breadcrumb trail across a sequence of root items.
pub fn trail<'a>(items: &'a [NavItem], path: &str) -> Option<Vec<&'a NavItem>> {
    items.iter().find_map(|item| item.trail_to(path))
}

/// Pre-order walk over every node of a sequence of roots.
pub fn walk(items: &[NavItem]) -> Walk<'_> {
    Walk::new(items)
}

/// Depth-first, pre-order iterator yielding `(depth, item)`.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a NavItem)>,
}

impl<'a> Walk<'a> {
    fn new(roots: &'a [NavItem]) -> Self {
        Self {
            stack: roots.iter().rev().map(|item| (0, item)).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a NavItem);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, item) = self.stack.pop()?;
        self.stack
            .extend(item.items().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, item))
    }
}

/// Previous and next pages around the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager<'a> {
    pub prev: Option<&'a NavItem>,
    pub next: Option<&'a NavItem>,
}

/// Doc-footer links for `path`, following the sidebar's declared order.
///
/// Only nodes with internal links take part. Returns an empty pager when
/// `path` is not in the sidebar.
pub fn pager<'a>(sidebar: &'a [NavItem], path: &str) -> Pager<'a> {
    let target = normalize_path(path);
    let pages: Vec<&NavItem> = walk(sidebar)
        .map(|(_, item)| item)
        .filter(|item| item.link_kind() == Some(LinkKind::Internal))
        .collect();

    let Some(pos) = pages
        .iter()
        .position(|item| item.link_target().map(normalize_path).as_deref() == Some(&*target))
    else {
        return Pager::default();
    };

    Pager {
        prev: pos.checked_sub(1).map(|i| pages[i]),
        next: pages.get(pos + 1).copied(),
    }
}

/// Normalize an in-site path for comparison.
///
/// Drops query and fragment, a `.md`/`.html` extension and a trailing
/// `index`, so `/guide/index.html` and `/guide/` compare equal.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['#', '?']).next().unwrap_or("");
    let path = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);

    match path.strip_suffix("index") {
        Some(dir) if dir.is_empty() || dir.ends_with('/') => dir.to_string(),
        _ => path.to_string(),
    }
}

/// Wire shape shared by links and groups.
#[derive(Serialize, Deserialize)]
struct RawNavItem {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<NavItem>,
}

impl TryFrom<RawNavItem> for NavItem {
    type Error = NavError;

    fn try_from(raw: RawNavItem) -> Result<Self, Self::Error> {
        NavItem::new(raw.text, raw.link, raw.items)
    }
}

impl From<NavItem> for RawNavItem {
    fn from(item: NavItem) -> Self {
        match item {
            NavItem::Link(l) => RawNavItem {
                text: l.text,
                link: Some(l.link),
                items: Vec::new(),
            },
            NavItem::Group(g) => RawNavItem {
                text: g.text,
                link: g.link,
                items: g.items,
            },
        }
    }
}

/// Errors that can occur when building navigation entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("Navigation entry text must not be blank")]
    BlankText,

    #[error("Navigation entry '{0}' has neither a link nor child items")]
    EmptyGroup(String),
}
