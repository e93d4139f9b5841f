//! Navkit test utilities.
//!
//! Fixture route trees, role helpers, and a locale catalog shared by the
//! integration tests.

use navkit::locale::LocaleCatalog;
use navkit::models::RouteNode;

/// Leaf route fixture.
pub fn route(key: &str, name: &str) -> RouteNode {
    RouteNode::leaf(key, name)
}

/// Container route fixture.
pub fn container(key: &str, name: &str, children: Vec<RouteNode>) -> RouteNode {
    RouteNode::container(key, name, children)
}

/// Owned role list from string literals.
pub fn roles(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// `[dashboard, list { list/card }]` with no access restrictions.
pub fn scenario_routes() -> Vec<RouteNode> {
    vec![
        route("dashboard", "Dashboard"),
        container("list", "List", vec![route("list/card", "CardList")]),
    ]
}

/// Same as [`scenario_routes`] with `list/card` restricted to `admin`.
pub fn restricted_scenario_routes() -> Vec<RouteNode> {
    vec![
        route("dashboard", "Dashboard"),
        container(
            "list",
            "List",
            vec![route("list/card", "CardList").access(["admin"])],
        ),
    ]
}

/// A dashboard-style admin tree using locale keys, icons, and access rules.
pub fn admin_routes() -> Vec<RouteNode> {
    vec![
        container(
            "dashboard",
            "menu.dashboard",
            vec![
                route("dashboard/workplace", "menu.dashboard.workplace"),
                route("dashboard/monitor", "menu.dashboard.monitor").access(["admin"]),
            ],
        )
        .icon("dashboard"),
        container(
            "list",
            "menu.list",
            vec![
                route("list/search-table", "menu.list.searchTable"),
                route("list/card", "menu.list.cardList"),
            ],
        )
        .icon("list"),
        container(
            "form",
            "menu.form",
            vec![
                route("form/group", "menu.form.group").access(["admin"]),
                route("form/step", "menu.form.step").access(["admin"]),
            ],
        )
        .icon("form"),
        container(
            "exception",
            "menu.exception",
            vec![
                route("exception/403", "menu.exception.403"),
                route("exception/404", "menu.exception.404").without_breadcrumb(),
            ],
        )
        .icon("exception"),
        container(
            "user",
            "menu.user",
            vec![
                container(
                    "user/setting",
                    "menu.user.setting",
                    vec![route("user/setting/security", "menu.user.security").access(["admin"])],
                ),
                route("user/info", "menu.user.info"),
            ],
        )
        .icon("user"),
        route("login", "menu.login").without_key(),
    ]
}

/// English strings for [`admin_routes`].
pub fn admin_locale() -> LocaleCatalog {
    [
        ("menu.dashboard", "Dashboard"),
        ("menu.dashboard.workplace", "Workplace"),
        ("menu.dashboard.monitor", "Monitor"),
        ("menu.list", "List"),
        ("menu.list.searchTable", "Search Table"),
        ("menu.list.cardList", "Card List"),
        ("menu.form", "Form"),
        ("menu.form.group", "Group Form"),
        ("menu.form.step", "Step Form"),
        ("menu.exception", "Exception"),
        ("menu.exception.403", "403"),
        ("menu.exception.404", "404"),
        ("menu.user", "User Center"),
        ("menu.user.setting", "Settings"),
        ("menu.user.info", "User Info"),
    ]
    .into_iter()
    .fold(LocaleCatalog::new("en-US"), |catalog, (k, v)| catalog.with(k, v))
}

/// Serialize a route forest to JSON, as a route file would hold it.
pub fn routes_json(routes: &[RouteNode]) -> String {
    serde_json::to_string_pretty(routes).unwrap_or_else(|_| "[]".to_string())
}

/// Leaf keys a user holding `user_roles` may see, assuming any-role access.
pub fn visible_leaf_keys(routes: &[RouteNode], user_roles: &[String]) -> Vec<String> {
    let mut keys = Vec::new();
    collect_visible(routes, user_roles, &mut keys);
    keys
}

fn collect_visible(routes: &[RouteNode], user_roles: &[String], keys: &mut Vec<String>) {
    for route in routes {
        if !route.children.is_empty() {
            collect_visible(&route.children, user_roles, keys);
            continue;
        }
        let Some(key) = &route.key else {
            continue;
        };
        let permitted = match &route.access {
            None => true,
            Some(required) => {
                required.is_empty() || required.iter().any(|r| user_roles.contains(r))
            }
        };
        if permitted {
            keys.push(key.clone());
        }
    }
}
