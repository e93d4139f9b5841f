//! Navigation shell: the state behind the page layout.
//!
//! The shell owns three independent state cells, each with one writer:
//! - selection (menu clicks, and navigation under [`SyncPolicy::Resync`])
//! - breadcrumb (committed navigations)
//! - collapsed (the collapse toggle and breakpoint)
//!
//! It also memoizes the menu compilation per set of user roles. Navigation
//! is two-phase: [`NavigationShell::request_navigation`] records the latest
//! path and [`NavigationShell::commit`] applies it once the current render
//! is done, so a superseded request is simply dropped.

use tracing::{debug, warn};

use crate::access::{AccessPolicy, AnyRole};
use crate::layout::{LayoutConfig, UrlOverrides, compose};
use crate::locale::{LocaleCatalog, LocaleLookup};
use crate::menu::{BreadcrumbLabel, Compilation, MenuNode, PathIndex, compile};
use crate::models::{RouteNode, Settings};
use crate::selection::{SelectionModel, SyncPolicy, strip_query};

/// Layout state for one mounted page.
#[derive(Debug)]
pub struct NavigationShell<P = AnyRole, L = LocaleCatalog> {
    routes: Vec<RouteNode>,
    policy: P,
    locale: L,
    /// Last compilation and the roles it was built for.
    compiled: Option<(Vec<String>, Compilation)>,
    selection: SelectionModel,
    collapsed: bool,
    pending: Option<String>,
}

impl<P, L> NavigationShell<P, L>
where
    P: AccessPolicy,
    L: LocaleLookup,
{
    /// Mount the shell at `current_path`.
    ///
    /// The mount path is queued as the first navigation, so the first
    /// [`commit`](Self::commit) fills in its breadcrumb.
    pub fn new(
        routes: Vec<RouteNode>,
        policy: P,
        locale: L,
        current_path: &str,
        default_route: &str,
        sync: SyncPolicy,
    ) -> Self {
        Self {
            routes,
            policy,
            locale,
            compiled: None,
            selection: SelectionModel::new(current_path, default_route, sync),
            collapsed: false,
            pending: Some(current_path.to_string()),
        }
    }

    /// Compile the menu for `roles`, reusing the previous result when the
    /// roles have not changed.
    pub fn compile_for(&mut self, roles: &[String]) -> &Compilation {
        if self
            .compiled
            .as_ref()
            .is_some_and(|(compiled_roles, _)| compiled_roles.as_slice() != roles)
        {
            debug!(roles = ?roles, "user roles changed, recompiling menu");
            self.compiled = None;
        }

        let (_, compilation) = self.compiled.get_or_insert_with(|| {
            (
                roles.to_vec(),
                compile(&self.routes, roles, &self.policy, &self.locale),
            )
        });
        compilation
    }

    pub fn compilation(&self) -> Option<&Compilation> {
        self.compiled.as_ref().map(|(_, c)| c)
    }

    /// Compiled menu forest; empty until [`compile_for`](Self::compile_for).
    pub fn menu(&self) -> &[MenuNode] {
        self.compilation()
            .map(|c| c.menu.as_slice())
            .unwrap_or_default()
    }

    pub fn index(&self) -> Option<&PathIndex> {
        self.compilation().map(|c| &c.index)
    }

    /// Menu item click.
    pub fn on_select(&mut self, key: impl Into<String>) {
        self.selection.select(key);
    }

    /// Collapse button; returns the new state.
    pub fn on_toggle_collapse(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Collapse set directly, e.g. by a responsive breakpoint.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Record a path change to apply at the next commit.
    pub fn request_navigation(&mut self, path: impl Into<String>) {
        let path = path.into();
        if let Some(superseded) = self.pending.replace(path) {
            debug!(path = %superseded, "navigation superseded before commit");
        }
    }

    /// Apply the latest requested navigation.
    ///
    /// Returns `true` when a new path was applied; `false` when nothing was
    /// pending or the path was already current.
    pub fn commit(&mut self) -> bool {
        let Some(path) = self.pending.take() else {
            return false;
        };

        let empty = PathIndex::default();
        let index = self.compiled.as_ref().map_or(&empty, |(_, c)| &c.index);

        if !index.contains(strip_query(&path)) {
            warn!(path = %path, "no breadcrumb registered for path");
        }

        self.selection.navigate(&path, index)
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    /// Current trail with raw locale keys.
    pub fn breadcrumb(&self) -> &[BreadcrumbLabel] {
        self.selection.breadcrumb()
    }

    /// Current trail with text labels translated.
    pub fn rendered_breadcrumb(&self) -> Vec<BreadcrumbLabel> {
        self.selection
            .breadcrumb()
            .iter()
            .map(|label| label.localized(&self.locale))
            .collect()
    }

    /// Layout for the next render.
    pub fn layout(&self, settings: &Settings, overrides: &UrlOverrides) -> LayoutConfig {
        compose(settings, overrides, self.collapsed)
    }
}
