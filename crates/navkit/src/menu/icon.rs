//! Menu icon decorations.

use serde::{Deserialize, Serialize};

/// Decoration shown next to a menu title.
///
/// The set is closed: unknown keys resolve to [`Icon::Empty`], which renders
/// as a blank placeholder of the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Dashboard,
    List,
    Settings,
    File,
    Apps,
    CheckCircle,
    ExclamationCircle,
    User,
    #[default]
    Empty,
}

impl Icon {
    /// Resolve an icon key. Total: never fails.
    pub fn from_key(key: &str) -> Self {
        match key {
            "dashboard" => Icon::Dashboard,
            "list" => Icon::List,
            "form" => Icon::Settings,
            "profile" => Icon::File,
            "visualization" => Icon::Apps,
            "result" => Icon::CheckCircle,
            "exception" => Icon::ExclamationCircle,
            "user" => Icon::User,
            _ => Icon::Empty,
        }
    }

    /// Resolve an optional key; absent keys are empty.
    pub fn resolve(key: Option<&str>) -> Self {
        key.map(Self::from_key).unwrap_or_default()
    }

    /// Whether this is a visible decoration rather than the placeholder.
    pub fn is_decoration(self) -> bool {
        self != Icon::Empty
    }
}
