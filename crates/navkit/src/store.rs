//! Global state: layout settings and the signed-in user.

use serde::{Deserialize, Serialize};

use crate::models::{Settings, UserInfo};

/// State shared by every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalState {
    pub settings: Settings,
    pub user_info: Option<UserInfo>,
    pub user_loading: bool,
}

/// State transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    UpdateSettings(Settings),
    UpdateUserInfo {
        user_info: Option<UserInfo>,
        user_loading: bool,
    },
}

impl GlobalState {
    /// Apply an action, returning the next state.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::UpdateSettings(settings) => Self { settings, ..self },
            Action::UpdateUserInfo {
                user_info,
                user_loading,
            } => Self {
                user_info: Some(user_info.unwrap_or_default()),
                user_loading,
                ..self
            },
        }
    }

    /// Roles of the current user; empty before user info arrives.
    pub fn roles(&self) -> &[String] {
        self.user_info
            .as_ref()
            .map(|u| u.roles.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_settings_keeps_user() {
        let state = GlobalState::default().reduce(Action::UpdateUserInfo {
            user_info: Some(UserInfo {
                roles: vec!["admin".to_string()],
                ..UserInfo::default()
            }),
            user_loading: false,
        });
        let next = state.reduce(Action::UpdateSettings(Settings {
            menu_width: 300,
            ..Settings::default()
        }));

        assert_eq!(next.settings.menu_width, 300);
        assert_eq!(next.roles(), ["admin"]);
    }

    #[test]
    fn missing_user_info_becomes_empty_record() {
        let state = GlobalState::default().reduce(Action::UpdateUserInfo {
            user_info: None,
            user_loading: true,
        });
        assert_eq!(state.user_info, Some(UserInfo::default()));
        assert!(state.user_loading);
        assert!(state.roles().is_empty());
    }

    #[test]
    fn initial_state_uses_default_settings() {
        let state = GlobalState::default();
        assert_eq!(state.settings, Settings::default());
        assert!(state.user_info.is_none());
    }
}
