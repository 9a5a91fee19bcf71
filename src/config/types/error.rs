//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Failure to load the SiteConfig document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to fetch `{0}`")]
    Fetch(String, #[source] reqwest::Error),

    #[error("invalid config document")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// ProjectError
// ============================================================================

/// Failure to load the `showcase.toml` project file.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("project file parsing error")]
    Toml(#[from] toml::de::Error),
}
