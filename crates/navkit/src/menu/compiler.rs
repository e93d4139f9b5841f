//! Route tree to menu compiler.
//!
//! A single depth-first traversal turns the route tree into the menu forest
//! and fills the [`PathIndex`] as it goes. Leaves the user may not see, and
//! nodes that are neither leaves nor containers, are dropped without error;
//! every drop is recorded in [`Compilation::omitted`].

use serde::Serialize;
use tracing::debug;

use super::icon::Icon;
use super::index::{BreadcrumbLabel, PathIndex};
use crate::access::{AccessPolicy, is_permitted};
use crate::locale::LocaleLookup;
use crate::models::{RouteKind, RouteNode};

/// Icon and localized label shown for a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleParts {
    pub icon: Icon,
    pub label: String,
}

/// A compiled menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuNode {
    /// Selectable leaf linking to `"/" + key`.
    Item { key: String, title: TitleParts },
    /// Expandable submenu.
    Container {
        key: Option<String>,
        title: TitleParts,
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    pub fn key(&self) -> Option<&str> {
        match self {
            MenuNode::Item { key, .. } => Some(key),
            MenuNode::Container { key, .. } => key.as_deref(),
        }
    }

    pub fn title(&self) -> &TitleParts {
        match self {
            MenuNode::Item { title, .. } | MenuNode::Container { title, .. } => title,
        }
    }

    /// Child entries; items have none.
    pub fn children(&self) -> &[MenuNode] {
        match self {
            MenuNode::Item { .. } => &[],
            MenuNode::Container { children, .. } => children,
        }
    }

    /// Link target for items.
    pub fn href(&self) -> Option<String> {
        match self {
            MenuNode::Item { key, .. } => Some(format!("/{key}")),
            MenuNode::Container { .. } => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, MenuNode::Container { .. })
    }
}

/// Why a route node produced no menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OmissionReason {
    /// Childless node without a key.
    MissingKey,
    /// The access policy rejected the user's roles.
    AccessDenied,
    /// Top-level container left with no children after filtering.
    EmptyContainer,
}

/// A route node dropped during compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Omission {
    pub key: Option<String>,
    pub name: String,
    pub reason: OmissionReason,
}

/// Output of one compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Compilation {
    pub menu: Vec<MenuNode>,
    pub index: PathIndex,
    pub omitted: Vec<Omission>,
}

/// Compile `routes` for a user holding `user_roles`.
pub fn compile<P, L>(
    routes: &[RouteNode],
    user_roles: &[String],
    policy: &P,
    locale: &L,
) -> Compilation
where
    P: AccessPolicy + ?Sized,
    L: LocaleLookup + ?Sized,
{
    let mut builder = Builder {
        policy,
        locale,
        user_roles,
        index: PathIndex::new(),
        omitted: Vec::new(),
    };

    let mut menu = Vec::with_capacity(routes.len());
    for route in routes {
        if let Some(node) = builder.compile_node(route, &[], true) {
            menu.push(node);
        }
    }

    debug!(
        top_level = menu.len(),
        paths = builder.index.len(),
        omitted = builder.omitted.len(),
        "compiled menu"
    );

    Compilation {
        menu,
        index: builder.index,
        omitted: builder.omitted,
    }
}

/// Traversal state threaded through the recursion.
struct Builder<'a, P: ?Sized, L: ?Sized> {
    policy: &'a P,
    locale: &'a L,
    user_roles: &'a [String],
    index: PathIndex,
    omitted: Vec<Omission>,
}

impl<P, L> Builder<'_, P, L>
where
    P: AccessPolicy + ?Sized,
    L: LocaleLookup + ?Sized,
{
    /// Compile one node. `is_top_level` decides whether an emptied container
    /// is pruned; nested containers are always kept, even when empty.
    fn compile_node(
        &mut self,
        route: &RouteNode,
        parent_labels: &[BreadcrumbLabel],
        is_top_level: bool,
    ) -> Option<MenuNode> {
        match route.kind() {
            RouteKind::Leaf => self.compile_leaf(route, parent_labels),
            RouteKind::Container => self.compile_container(route, parent_labels, is_top_level),
            RouteKind::Decorative => {
                self.omit(route, OmissionReason::MissingKey);
                None
            }
        }
    }

    fn compile_leaf(
        &mut self,
        route: &RouteNode,
        parent_labels: &[BreadcrumbLabel],
    ) -> Option<MenuNode> {
        let key = route.key.as_ref()?;

        if !is_permitted(self.policy, route.access.as_deref(), self.user_roles) {
            self.omit(route, OmissionReason::AccessDenied);
            return None;
        }

        let trail = if route.breadcrumb {
            let mut trail = parent_labels.to_vec();
            trail.push(BreadcrumbLabel::text(&route.name));
            trail
        } else {
            Vec::new()
        };
        self.index.register(format!("/{key}"), trail);

        Some(MenuNode::Item {
            key: key.clone(),
            title: self.title(route),
        })
    }

    fn compile_container(
        &mut self,
        route: &RouteNode,
        parent_labels: &[BreadcrumbLabel],
        is_top_level: bool,
    ) -> Option<MenuNode> {
        let mut labels = parent_labels.to_vec();
        let icon = Icon::resolve(route.icon_key.as_deref());
        if icon.is_decoration() {
            labels.push(BreadcrumbLabel::Icon(icon));
        }
        labels.push(BreadcrumbLabel::text(&route.name));

        let children: Vec<MenuNode> = route
            .children
            .iter()
            .filter_map(|child| self.compile_node(child, &labels, false))
            .collect();

        if is_top_level && children.is_empty() {
            self.omit(route, OmissionReason::EmptyContainer);
            return None;
        }

        Some(MenuNode::Container {
            key: route.key.clone(),
            title: self.title(route),
            children,
        })
    }

    fn title(&self, route: &RouteNode) -> TitleParts {
        TitleParts {
            icon: Icon::resolve(route.icon_key.as_deref()),
            label: self.locale.translate(&route.name),
        }
    }

    fn omit(&mut self, route: &RouteNode, reason: OmissionReason) {
        debug!(
            key = route.key.as_deref().unwrap_or_default(),
            name = %route.name,
            ?reason,
            "route omitted from menu"
        );
        self.omitted.push(Omission {
            key: route.key.clone(),
            name: route.name.clone(),
            reason,
        });
    }
}
