//! Error types for loading navigation inputs.
//!
//! The compiler itself never fails; these errors only surface at the edges
//! where route trees, settings, and locale catalogs are read from disk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading navigation inputs.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported file format: {0:?}")]
    UnsupportedFormat(String),
}

/// Result type alias using NavError.
pub type NavResult<T> = Result<T, NavError>;

/// Read a file into a string, attaching the path to any I/O failure.
pub(crate) fn read_to_string(path: &std::path::Path) -> NavResult<String> {
    std::fs::read_to_string(path).map_err(|source| NavError::Io {
        path: path.to_path_buf(),
        source,
    })
}
