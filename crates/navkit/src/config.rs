//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::selection::SyncPolicy;

/// Default route selected when the page path is empty.
pub const DEFAULT_ROUTE: &str = "dashboard/workplace";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Route tree file (.json, .yaml, .yml, or .toml).
    pub routes_path: PathBuf,

    /// Layout settings JSON. When None, built-in defaults apply.
    pub settings_path: Option<PathBuf>,

    /// Flat locale JSON. When None, locale keys display as-is.
    pub locale_path: Option<PathBuf>,

    /// Language tag of the locale file (default: "en-US").
    pub language: String,

    /// Route selected for an empty path (default: "dashboard/workplace").
    pub default_route: String,

    /// Whether navigation re-syncs the menu selection (default: click-only).
    pub selection_sync: SyncPolicy,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_routes(None)
    }

    /// Load configuration from environment variables, taking the route file
    /// from `routes_path` when given instead of `NAVKIT_ROUTES`.
    pub fn from_env_with_routes(routes_path: Option<PathBuf>) -> Result<Self> {
        Self::from_vars(routes_path, |name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup.
    fn from_vars<F>(routes_path: Option<PathBuf>, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let routes_path = match routes_path {
            Some(path) => path,
            None => var("NAVKIT_ROUTES")
                .map(PathBuf::from)
                .context("NAVKIT_ROUTES environment variable is required")?,
        };

        let settings_path = var("NAVKIT_SETTINGS").map(PathBuf::from);
        let locale_path = var("NAVKIT_LOCALE").map(PathBuf::from);

        let language = var("NAVKIT_LANGUAGE").unwrap_or_else(|| "en-US".to_string());

        let default_route =
            var("NAVKIT_DEFAULT_ROUTE").unwrap_or_else(|| DEFAULT_ROUTE.to_string());

        let selection_sync = var("NAVKIT_SELECTION_SYNC")
            .unwrap_or_else(|| "click-only".to_string())
            .parse::<SyncPolicy>()
            .context("NAVKIT_SELECTION_SYNC must be \"click-only\" or \"resync\"")?;

        Ok(Self {
            routes_path,
            settings_path,
            locale_path,
            language,
            default_route,
            selection_sync,
        })
    }
}
