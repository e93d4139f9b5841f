//! Menu selection and breadcrumb state derived from the URL path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::menu::{BreadcrumbLabel, PathIndex};

/// Whether navigation re-derives the selected and open keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncPolicy {
    /// Only an explicit menu click changes the selection.
    #[default]
    ClickOnly,
    /// Every navigation re-derives selection and open keys from the path.
    Resync,
}

#[derive(Debug, Error)]
#[error("unknown selection sync policy: {0:?} (expected \"click-only\" or \"resync\")")]
pub struct UnknownSyncPolicy(String);

impl FromStr for SyncPolicy {
    type Err = UnknownSyncPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "click-only" | "click_only" | "click" => Ok(SyncPolicy::ClickOnly),
            "resync" => Ok(SyncPolicy::Resync),
            other => Err(UnknownSyncPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for SyncPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncPolicy::ClickOnly => f.write_str("click-only"),
            SyncPolicy::Resync => f.write_str("resync"),
        }
    }
}

/// Strip the query string and fragment from a path.
pub fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Strip the query string, fragment, and leading slash from a path.
///
/// `"/list/card?tab=1"` → `"list/card"`
pub fn path_component(path: &str) -> &str {
    strip_query(path).trim_start_matches('/')
}

/// Selection state of the menu plus the active breadcrumb trail.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    selected_keys: Vec<String>,
    open_keys: Vec<String>,
    breadcrumb: Vec<BreadcrumbLabel>,
    /// Last path whose breadcrumb was computed.
    current_path: Option<String>,
    default_route: String,
    policy: SyncPolicy,
}

impl SelectionModel {
    /// Derive the initial selection from the path shown at mount.
    pub fn new(current_path: &str, default_route: impl Into<String>, policy: SyncPolicy) -> Self {
        let default_route = default_route.into();
        let (selected_keys, open_keys) = derive_keys(current_path, &default_route);

        Self {
            selected_keys,
            open_keys,
            breadcrumb: Vec::new(),
            current_path: None,
            default_route,
            policy,
        }
    }

    /// Explicit menu click. Open keys are left alone.
    pub fn select(&mut self, key: impl Into<String>) {
        self.selected_keys = vec![key.into()];
    }

    /// React to a path change.
    ///
    /// Recomputes the breadcrumb from `index` (a miss gives an empty trail).
    /// Returns `false` without doing anything when `path` is the path
    /// already applied. The query string and fragment are not part of the
    /// path, so `/a` and `/a?menu=false` are the same navigation.
    pub fn navigate(&mut self, path: &str, index: &PathIndex) -> bool {
        let path = strip_query(path);
        if self.current_path.as_deref() == Some(path) {
            return false;
        }

        self.breadcrumb = index.get(path).to_vec();

        if self.policy == SyncPolicy::Resync {
            let (selected_keys, open_keys) = derive_keys(path, &self.default_route);
            self.selected_keys = selected_keys;
            self.open_keys = open_keys;
        }

        debug!(
            path = %path,
            crumbs = self.breadcrumb.len(),
            policy = %self.policy,
            "selection navigated"
        );
        self.current_path = Some(path.to_string());
        true
    }

    pub fn selected_keys(&self) -> &[String] {
        &self.selected_keys
    }

    pub fn open_keys(&self) -> &[String] {
        &self.open_keys
    }

    pub fn breadcrumb(&self) -> &[BreadcrumbLabel] {
        &self.breadcrumb
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }
}

/// Selected key and ancestor keys for a path.
fn derive_keys(path: &str, default_route: &str) -> (Vec<String>, Vec<String>) {
    let component = match path_component(path) {
        "" => default_route,
        c => c,
    };

    let segments: Vec<&str> = component.split('/').collect();
    let open_keys = segments[..segments.len() - 1]
        .iter()
        .map(|s| s.to_string())
        .collect();

    (vec![component.to_string()], open_keys)
}
