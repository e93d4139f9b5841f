//! Static layout settings and the signed-in user's profile.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NavResult, read_to_string};

/// Site-wide layout settings, usually shipped as `settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub navbar: bool,
    pub menu: bool,
    pub footer: bool,
    /// Expanded menu width in pixels.
    pub menu_width: u32,
    pub theme_color: String,
    #[serde(alias = "colorWeek")]
    pub color_weak: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            navbar: true,
            menu: true,
            footer: true,
            menu_width: 220,
            theme_color: "#165DFF".to_string(),
            color_weak: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> NavResult<Self> {
        let source = read_to_string(path)?;
        Ok(serde_json::from_str(&source)?)
    }
}

/// Profile of the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub job: Option<String>,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn settings_partial_json() {
        let settings: Settings =
            serde_json::from_str(r#"{"menu": false, "menuWidth": 260, "colorWeek": true}"#)
                .unwrap();
        assert!(!settings.menu);
        assert!(settings.navbar);
        assert_eq!(settings.menu_width, 260);
        assert!(settings.color_weak);
        assert_eq!(settings.theme_color, "#165DFF");
    }

    #[test]
    fn user_info_roles_default_empty() {
        let user: UserInfo = serde_json::from_str(r#"{"name": "admin"}"#).unwrap();
        assert_eq!(user.name.as_deref(), Some("admin"));
        assert!(user.roles.is_empty());
    }
}
