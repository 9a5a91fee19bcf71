//! `app`, `theme` and `mode` keys.
//!
//! # Example
//!
//! ```json
//! {
//!   "app": { "name": "Lumen", "description": "...", "tagline": "..." },
//!   "theme": { "primaryColor": "#6366f1", "secondaryColor": "#8b5cf6" },
//!   "mode": "support"
//! }
//! ```

use serde::Deserialize;

/// App identity strings shown across several sections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppInfo {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub tagline: Option<String>,
}

/// CSS custom-property overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

/// Page mode. Any value other than `support` renders as marketing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Support,
    #[default]
    #[serde(other)]
    Marketing,
}

impl Mode {
    /// Suffix used in the page title.
    pub const fn title_suffix(self) -> &'static str {
        match self {
            Self::Support => "Support",
            Self::Marketing => "Marketing",
        }
    }
}
