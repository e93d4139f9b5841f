//! Route tree input model.
//!
//! A route tree is an ordered, static forest authored outside this crate.
//! Nodes with children are containers, childless nodes with a key are leaves,
//! and anything else is decorative and ignored by the compiler.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NavError, NavResult, read_to_string};

/// A single node of the route tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Route key; the leaf path is `"/" + key`.
    #[serde(default)]
    pub key: Option<String>,
    /// Locale key for the display name.
    pub name: String,
    /// Icon key resolved through `Icon::from_key`.
    #[serde(default, alias = "iconKey", alias = "icon")]
    pub icon_key: Option<String>,
    #[serde(default)]
    pub children: Vec<RouteNode>,
    /// Roles required to see this leaf (absent = public).
    #[serde(default)]
    pub access: Option<Vec<String>>,
    /// Whether this leaf gets a breadcrumb trail.
    #[serde(default = "default_true")]
    pub breadcrumb: bool,
}

fn default_true() -> bool {
    true
}

/// Structural role of a route node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Container,
    Leaf,
    Decorative,
}

impl RouteNode {
    /// Create a leaf route.
    pub fn leaf(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            name: name.into(),
            icon_key: None,
            children: Vec::new(),
            access: None,
            breadcrumb: true,
        }
    }

    /// Create a container route wrapping `children`.
    pub fn container(
        key: impl Into<String>,
        name: impl Into<String>,
        children: Vec<RouteNode>,
    ) -> Self {
        Self {
            children,
            ..Self::leaf(key, name)
        }
    }

    pub fn icon(mut self, icon_key: impl Into<String>) -> Self {
        self.icon_key = Some(icon_key.into());
        self
    }

    pub fn access<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.access = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn without_breadcrumb(mut self) -> Self {
        self.breadcrumb = false;
        self
    }

    pub fn without_key(mut self) -> Self {
        self.key = None;
        self
    }

    pub fn kind(&self) -> RouteKind {
        if !self.children.is_empty() {
            RouteKind::Container
        } else if self.key.is_some() {
            RouteKind::Leaf
        } else {
            RouteKind::Decorative
        }
    }
}

/// TOML needs a top-level table, so route files in that format wrap the
/// forest in a `routes` array.
#[derive(Deserialize)]
struct TomlRoutes {
    #[serde(default)]
    routes: Vec<RouteNode>,
}

/// Parse a route forest from a JSON array.
pub fn routes_from_json(source: &str) -> NavResult<Vec<RouteNode>> {
    Ok(serde_json::from_str(source)?)
}

/// Parse a route forest from a YAML sequence.
pub fn routes_from_yaml(source: &str) -> NavResult<Vec<RouteNode>> {
    Ok(serde_yml::from_str(source)?)
}

/// Parse a route forest from a TOML document with `[[routes]]` tables.
pub fn routes_from_toml(source: &str) -> NavResult<Vec<RouteNode>> {
    let file: TomlRoutes = toml::from_str(source)?;
    Ok(file.routes)
}

/// Load a route forest, choosing the format from the file extension.
pub fn load_routes(path: &Path) -> NavResult<Vec<RouteNode>> {
    let source = read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let routes = match ext.as_str() {
        "json" => routes_from_json(&source)?,
        "yaml" | "yml" => routes_from_yaml(&source)?,
        "toml" => routes_from_toml(&source)?,
        _ => return Err(NavError::UnsupportedFormat(ext)),
    };

    debug!(path = %path.display(), routes = routes.len(), "loaded route tree");
    Ok(routes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification() {
        assert_eq!(RouteNode::leaf("a", "A").kind(), RouteKind::Leaf);
        assert_eq!(
            RouteNode::container("a", "A", vec![RouteNode::leaf("a/b", "B")]).kind(),
            RouteKind::Container
        );
        assert_eq!(
            RouteNode::leaf("a", "A").without_key().kind(),
            RouteKind::Decorative
        );
        // A keyless node with children is still a container.
        assert_eq!(
            RouteNode::container("a", "A", vec![RouteNode::leaf("a/b", "B")])
                .without_key()
                .kind(),
            RouteKind::Container
        );
    }

    #[test]
    fn json_defaults() {
        let routes = routes_from_json(
            r#"[
                {"key": "dashboard", "name": "menu.dashboard"},
                {"name": "menu.list", "key": "list", "children": [
                    {"key": "list/card", "name": "menu.list.card", "breadcrumb": false,
                     "access": ["admin"]}
                ]}
            ]"#,
        )
        .unwrap();

        assert_eq!(routes.len(), 2);
        assert!(routes[0].breadcrumb);
        assert!(routes[0].children.is_empty());
        assert!(routes[0].access.is_none());
        let card = &routes[1].children[0];
        assert!(!card.breadcrumb);
        assert_eq!(card.access.as_deref(), Some(&["admin".to_string()][..]));
    }

    #[test]
    fn json_icon_key_aliases() {
        let routes =
            routes_from_json(r#"[{"key": "a", "name": "A", "iconKey": "list"}]"#).unwrap();
        assert_eq!(routes[0].icon_key.as_deref(), Some("list"));
    }

    #[test]
    fn yaml_routes() {
        let routes = routes_from_yaml(
            "- key: dashboard\n  name: Dashboard\n  icon_key: dashboard\n- key: user\n  name: User\n",
        )
        .unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].icon_key.as_deref(), Some("dashboard"));
    }

    #[test]
    fn toml_routes() {
        let routes = routes_from_toml(
            r#"
            [[routes]]
            key = "list"
            name = "List"

            [[routes.children]]
            key = "list/card"
            name = "CardList"
            "#,
        )
        .unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].children[0].key.as_deref(), Some("list/card"));
    }

    #[test]
    fn unsupported_extension() {
        let dir = std::env::temp_dir()
            .join(format!("navkit-route-ext-test-{}.txt", std::process::id()));
        std::fs::write(&dir, "[]").unwrap();
        let err = load_routes(&dir).unwrap_err();
        assert!(matches!(err, NavError::UnsupportedFormat(ext) if ext == "txt"));
        let _ = std::fs::remove_file(&dir);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_routes(Path::new("/nonexistent/navkit/routes.json")).unwrap_err();
        assert!(matches!(err, NavError::Io { .. }));
    }
}
