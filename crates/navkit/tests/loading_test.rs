#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for loading route trees, settings, and locale files.

mod common;

use common::{compile_plain, temp_file};
use navkit::NavError;
use navkit::locale::{LocaleCatalog, LocaleLookup};
use navkit::models::{Settings, load_routes};
use navkit_test_utils::{admin_routes, roles, routes_json, scenario_routes};

#[test]
fn test_json_route_file_round_trips_compilation() {
    let path = temp_file("routes.json", &routes_json(&admin_routes()));
    let loaded = load_routes(&path).unwrap();
    assert_eq!(loaded, admin_routes());

    let from_file = compile_plain(&loaded, &roles(&["guest"]));
    let in_memory = compile_plain(&admin_routes(), &roles(&["guest"]));
    assert_eq!(from_file, in_memory);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_yaml_route_file() {
    let yaml = r#"
- key: dashboard
  name: Dashboard
- key: list
  name: List
  children:
    - key: list/card
      name: CardList
      access: [admin]
"#;
    let path = temp_file("routes.yaml", yaml);
    let routes = load_routes(&path).unwrap();
    assert_eq!(routes.len(), 2);

    let out = compile_plain(&routes, &roles(&["guest"]));
    assert_eq!(out.menu.len(), 1);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_toml_route_file() {
    let toml = r#"
[[routes]]
key = "dashboard"
name = "Dashboard"

[[routes]]
key = "list"
name = "List"

[[routes.children]]
key = "list/card"
name = "CardList"
"#;
    let path = temp_file("routes.toml", toml);
    let routes = load_routes(&path).unwrap();
    assert_eq!(routes, scenario_routes());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_malformed_route_file() {
    let path = temp_file("broken.json", "[{\"key\": ");
    let err = load_routes(&path).unwrap_err();
    assert!(matches!(err, NavError::Json(_)));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_settings_and_locale_files() {
    let settings_path = temp_file("settings.json", r#"{"navbar": false, "menuWidth": 200}"#);
    let settings = Settings::load(&settings_path).unwrap();
    assert!(!settings.navbar);
    assert!(settings.menu);
    assert_eq!(settings.menu_width, 200);

    let locale_path = temp_file("locale.json", r#"{"menu.list": "List"}"#);
    let locale = LocaleCatalog::load("en-US", &locale_path).unwrap();
    assert_eq!(locale.translate("menu.list"), "List");
    assert_eq!(locale.translate("menu.form"), "menu.form");

    let _ = std::fs::remove_file(&settings_path);
    let _ = std::fs::remove_file(&locale_path);
}
