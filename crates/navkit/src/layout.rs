//! Page chrome layout: which regions show, menu width, content padding.

use serde::Serialize;
use url::Url;

use crate::models::Settings;

/// Height of the fixed top navbar in pixels.
pub const NAVBAR_HEIGHT: u32 = 60;

/// Menu width while collapsed, in pixels.
pub const COMPACT_MENU_WIDTH: u32 = 48;

/// Visibility overrides read from the page URL (`?menu=false`).
///
/// Overrides can only hide a region the settings enable; they never show
/// one the settings disable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UrlOverrides {
    pub navbar: Option<bool>,
    pub menu: Option<bool>,
    pub footer: Option<bool>,
}

impl UrlOverrides {
    /// Parse overrides from a raw query string, with or without `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let pairs = url::form_urlencoded::parse(query.as_bytes());

        let mut overrides = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "navbar" => &mut overrides.navbar,
                "menu" => &mut overrides.menu,
                "footer" => &mut overrides.footer,
                _ => continue,
            };
            if let Some(flag) = parse_flag(&value) {
                *slot = Some(flag);
            }
        }
        overrides
    }

    /// Parse overrides from a full URL.
    pub fn from_url(url: &Url) -> Self {
        url.query().map(Self::from_query).unwrap_or_default()
    }

    /// Parse overrides from a path that may carry a query (`/a?menu=0`).
    pub fn from_path(path: &str) -> Self {
        path.split_once('?')
            .map(|(_, query)| Self::from_query(query))
            .unwrap_or_default()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Veto-only combination of a setting and its URL override.
fn shown(setting: bool, veto: Option<bool>) -> bool {
    setting && veto != Some(false)
}

/// Padding applied around the content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub left: Option<u32>,
    pub top: Option<u32>,
}

impl Padding {
    /// Merge two paddings; sides set in `other` win.
    pub fn merge(self, other: Padding) -> Padding {
        Padding {
            left: other.left.or(self.left),
            top: other.top.or(self.top),
        }
    }
}

/// Rendering parameters for the page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutConfig {
    pub collapsed: bool,
    pub menu_width: u32,
    pub show_navbar: bool,
    pub show_menu: bool,
    pub show_footer: bool,
    pub navbar_height: u32,
    /// Padding of the content column.
    pub content_padding: Padding,
    /// Top padding of the sider, clearing the navbar.
    pub sider_padding: Padding,
}

/// Combine static settings, URL overrides, and the collapse toggle.
pub fn compose(settings: &Settings, overrides: &UrlOverrides, collapsed: bool) -> LayoutConfig {
    let menu_width = if collapsed {
        COMPACT_MENU_WIDTH
    } else {
        settings.menu_width
    };

    let show_navbar = shown(settings.navbar, overrides.navbar);
    let show_menu = shown(settings.menu, overrides.menu);
    let show_footer = shown(settings.footer, overrides.footer);

    let padding_left = Padding {
        left: show_menu.then_some(menu_width),
        top: None,
    };
    let padding_top = Padding {
        left: None,
        top: show_navbar.then_some(NAVBAR_HEIGHT),
    };

    LayoutConfig {
        collapsed,
        menu_width,
        show_navbar,
        show_menu,
        show_footer,
        navbar_height: NAVBAR_HEIGHT,
        content_padding: padding_left.merge(padding_top),
        sider_padding: padding_top,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_forces_compact_width() {
        let settings = Settings {
            menu_width: 300,
            ..Settings::default()
        };
        let layout = compose(&settings, &UrlOverrides::default(), true);
        assert_eq!(layout.menu_width, COMPACT_MENU_WIDTH);
        assert_eq!(layout.content_padding.left, Some(COMPACT_MENU_WIDTH));

        let layout = compose(&settings, &UrlOverrides::default(), false);
        assert_eq!(layout.menu_width, 300);
    }

    #[test]
    fn override_can_hide_menu() {
        let layout = compose(
            &Settings::default(),
            &UrlOverrides::from_query("menu=false"),
            false,
        );
        assert!(!layout.show_menu);
        assert_eq!(layout.content_padding.left, None);
    }

    #[test]
    fn override_cannot_show_disabled_menu() {
        let settings = Settings {
            menu: false,
            ..Settings::default()
        };
        let layout = compose(&settings, &UrlOverrides::from_query("menu=true"), false);
        assert!(!layout.show_menu);
    }

    #[test]
    fn padding_follows_visible_regions() {
        let layout = compose(&Settings::default(), &UrlOverrides::default(), false);
        assert_eq!(
            layout.content_padding,
            Padding {
                left: Some(220),
                top: Some(NAVBAR_HEIGHT)
            }
        );
        assert_eq!(layout.sider_padding.top, Some(NAVBAR_HEIGHT));

        let layout = compose(
            &Settings::default(),
            &UrlOverrides::from_query("?navbar=0"),
            false,
        );
        assert!(!layout.show_navbar);
        assert_eq!(layout.content_padding.top, None);
        assert_eq!(layout.content_padding.left, Some(220));
        assert_eq!(layout.sider_padding, Padding::default());
    }

    #[test]
    fn footer_override() {
        let layout = compose(
            &Settings::default(),
            &UrlOverrides::from_query("footer=false"),
            false,
        );
        assert!(!layout.show_footer);
        assert!(layout.show_menu);
        assert_eq!(layout.navbar_height, NAVBAR_HEIGHT);
    }

    #[test]
    fn query_parsing() {
        let overrides = UrlOverrides::from_query("navbar=false&menu=1&footer=maybe&x=false");
        assert_eq!(overrides.navbar, Some(false));
        assert_eq!(overrides.menu, Some(true));
        assert_eq!(overrides.footer, None);
    }

    #[test]
    fn url_and_path_parsing() {
        let url = Url::parse("https://example.com/dashboard?menu=false").unwrap();
        assert_eq!(UrlOverrides::from_url(&url).menu, Some(false));
        assert_eq!(UrlOverrides::from_path("/dashboard?footer=0").footer, Some(false));
        assert_eq!(UrlOverrides::from_path("/dashboard"), UrlOverrides::default());
    }
}
