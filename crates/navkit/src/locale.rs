//! Locale lookup for menu titles and breadcrumb labels.
//!
//! Route names are locale keys. A lookup miss is never an error: the key
//! itself is displayed instead.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::{NavResult, read_to_string};

/// Black-box mapping from a locale key to a display string.
pub trait LocaleLookup {
    /// Look up a key, returning `None` on a miss.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Translate a key, falling back to the key itself.
    fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }
}

impl<F> LocaleLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// In-memory catalog of interface strings for a single language.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    language: String,
    strings: HashMap<String, String>,
}

impl LocaleCatalog {
    /// Create an empty catalog.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            strings: HashMap::new(),
        }
    }

    /// Load a flat JSON object of `key -> string` pairs.
    pub fn load(language: impl Into<String>, path: &Path) -> NavResult<Self> {
        let source = read_to_string(path)?;
        let strings: HashMap<String, String> = serde_json::from_str(&source)?;
        let catalog = Self {
            language: language.into(),
            strings,
        };

        info!(
            language = %catalog.language,
            count = catalog.len(),
            "loaded locale strings"
        );
        Ok(catalog)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl LocaleLookup for LocaleCatalog {
    fn lookup(&self, key: &str) -> Option<String> {
        // An empty translation displays as the key, same as a miss.
        self.strings.get(key).filter(|s| !s.is_empty()).cloned()
    }
}
