#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common helpers for integration tests.

#![allow(dead_code)]

use navkit::access::AnyRole;
use navkit::locale::LocaleCatalog;
use navkit::menu::{Compilation, MenuNode, compile};
use navkit::models::RouteNode;

/// Compile with the default policy and no translations.
pub fn compile_plain(routes: &[RouteNode], user_roles: &[String]) -> Compilation {
    compile(routes, user_roles, &AnyRole::new(), &LocaleCatalog::default())
}

/// Keys of every item in the forest, depth-first.
pub fn item_keys(menu: &[MenuNode]) -> Vec<String> {
    let mut keys = Vec::new();
    for node in menu {
        match node {
            MenuNode::Item { key, .. } => keys.push(key.clone()),
            MenuNode::Container { children, .. } => keys.extend(item_keys(children)),
        }
    }
    keys
}

/// Write `contents` to a uniquely named file in the temp dir.
pub fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("navkit-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}
