//! Reverse index from leaf path to breadcrumb trail.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::icon::Icon;
use crate::locale::LocaleLookup;

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BreadcrumbLabel {
    /// A locale key (or, once localized, a display string).
    Text(String),
    /// A pre-resolved decoration.
    Icon(Icon),
}

impl BreadcrumbLabel {
    pub fn text(key: impl Into<String>) -> Self {
        BreadcrumbLabel::Text(key.into())
    }

    /// Resolve text labels through `locale`; decorations pass through.
    pub fn localized<L: LocaleLookup + ?Sized>(&self, locale: &L) -> Self {
        match self {
            BreadcrumbLabel::Text(key) => BreadcrumbLabel::Text(locale.translate(key)),
            BreadcrumbLabel::Icon(icon) => BreadcrumbLabel::Icon(*icon),
        }
    }
}

/// Mapping from absolute path (`"/" + key`) to breadcrumb labels.
///
/// Only the compiler writes to an index; callers get read access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathIndex {
    entries: HashMap<String, Vec<BreadcrumbLabel>>,
}

impl PathIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register the trail for a leaf path. A repeated key overwrites.
    pub(crate) fn register(&mut self, path: String, labels: Vec<BreadcrumbLabel>) {
        self.entries.insert(path, labels);
    }

    /// Breadcrumb trail for `path`; a miss yields an empty trail.
    pub fn get(&self, path: &str) -> &[BreadcrumbLabel] {
        self.entries.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
