//! Page configuration (`config.json`) and project settings (`showcase.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # SiteConfig key definitions
//! ├── types/         # ConfigError, Diagnostics, ConfigSource
//! ├── project        # showcase.toml ([build], [serve])
//! ├── validate       # structural warnings for `check`
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key                                  | Section rendered        |
//! |--------------------------------------|-------------------------|
//! | `app`, `theme`, `mode`               | identity, colors, title |
//! | `navigation`                         | nav bar                 |
//! | `hero`                               | hero                    |
//! | `features`, `featuresTitle`          | features grid           |
//! | `screenshots`, `screenshotsTitle`    | screenshot gallery      |
//! | `downloads`, `download{Title,Subtitle}` | download buttons     |
//! | `support`, `supportTitle`            | support cards           |
//! | `contactForm`                        | contact form            |
//! | `faq`, `faqTitle`                    | FAQ list                |
//! | `footer`, `social`                   | footer                  |

pub mod project;
pub mod section;
pub mod types;
mod util;
mod validate;

pub use project::ProjectConfig;
pub use section::{
    AppInfo, ContactFormConfig, Download, FaqItem, Feature, FooterConfig, FormHandler,
    HeroButton, HeroConfig, LinkItem, Mode, Screenshot, SocialLink, SupportCard, ThemeConfig,
};
pub use types::{ConfigError, ConfigSource, Diagnostics, ProjectError};

use crate::log;
use serde::Deserialize;

// ============================================================================
// root configuration
// ============================================================================

/// Root of the JSON document driving all page content.
///
/// Every key is optional. The value is built once per render and only read
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub app: Option<AppInfo>,
    pub theme: Option<ThemeConfig>,
    pub mode: Option<Mode>,
    pub navigation: Option<Vec<LinkItem>>,
    pub hero: Option<HeroConfig>,

    pub features: Option<Vec<Feature>>,
    pub features_title: Option<String>,

    pub screenshots: Option<Vec<Screenshot>>,
    pub screenshots_title: Option<String>,

    pub downloads: Option<Vec<Download>>,
    pub download_title: Option<String>,
    pub download_subtitle: Option<String>,

    pub support: Option<Vec<SupportCard>>,
    pub support_title: Option<String>,
    pub contact_form: Option<ContactFormConfig>,

    pub faq: Option<Vec<FaqItem>>,
    pub faq_title: Option<String>,

    pub footer: Option<FooterConfig>,
    pub social: Option<Vec<SocialLink>>,
}

impl SiteConfig {
    /// Built-in configuration used when the document cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            app: Some(AppInfo {
                name: "My App".into(),
                description: Some("A beautiful app for all your needs".into()),
                tagline: Some("Experience the future of productivity".into()),
            }),
            theme: Some(ThemeConfig {
                primary_color: Some("#6366f1".into()),
                secondary_color: Some("#8b5cf6".into()),
            }),
            mode: Some(Mode::Marketing),
            ..Self::default()
        }
    }

    /// Effective page mode (absent → marketing).
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    /// Parse a JSON document.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a JSON document, collecting any keys that were not understood.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config = serde_ignored::deserialize(&mut deserializer, |path| {
            ignored.push(path.to_string());
        })?;
        deserializer.end()?;
        Ok((config, ignored))
    }

    /// Load the document from `source`, surfacing every failure.
    pub async fn try_load(source: &ConfigSource) -> Result<Self, ConfigError> {
        let content = source.fetch().await?;
        Self::from_json(&content)
    }

    /// Load the document from `source`, falling back to [`SiteConfig::fallback`]
    /// on any failure. The failure is logged, never returned.
    pub async fn load(source: &ConfigSource) -> Self {
        match Self::try_load(source).await {
            Ok(config) => config,
            Err(err) => {
                log!("config"; "error loading {}: {}", source, error_chain(&err));
                log!("config"; "using built-in defaults");
                Self::fallback()
            }
        }
    }
}

/// Render an error with its `source()` chain on one line.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_document() {
        let config = SiteConfig::from_json(
            r##"{
                "app": {"name": "Lumen", "tagline": "Light"},
                "mode": "support",
                "navigation": [{"label": "Home", "url": "/"}],
                "features": [{"title": "Fast", "description": "Very"}],
                "featuresTitle": "Why Lumen",
                "downloadSubtitle": "Everywhere",
                "contactForm": {"enabled": true, "handler": "api", "apiUrl": "/x"},
                "footer": {"legal": [{"label": "Privacy"}]}
            }"##,
        )
        .unwrap();

        assert_eq!(config.app.as_ref().unwrap().name, "Lumen");
        assert_eq!(config.mode(), Mode::Support);
        assert_eq!(config.navigation.as_ref().unwrap().len(), 1);
        assert_eq!(config.features_title.as_deref(), Some("Why Lumen"));
        assert_eq!(config.download_subtitle.as_deref(), Some("Everywhere"));
        assert_eq!(
            config.contact_form.as_ref().unwrap().api_url.as_deref(),
            Some("/x")
        );
        assert!(config.footer.as_ref().unwrap().links.is_none());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.mode(), Mode::Marketing);
    }

    #[test]
    fn test_null_mode_is_marketing() {
        let config = SiteConfig::from_json(r#"{"mode": null}"#).unwrap();
        assert_eq!(config.mode(), Mode::Marketing);
    }

    #[test]
    fn test_null_item_fields_keep_document() {
        let config = SiteConfig::from_json(
            r#"{
                "app": {"name": "Orbit"},
                "social": [{"name": "GitHub", "external": null}],
                "features": [{"title": "Sync", "description": null}],
                "contactForm": {"enabled": null}
            }"#,
        )
        .unwrap();

        assert_eq!(config.app.unwrap().name, "Orbit");
        assert!(!config.social.unwrap()[0].external);
        assert!(config.features.unwrap()[0].description.is_empty());
        assert!(!config.contact_form.unwrap().enabled);
    }

    #[test]
    fn test_wrong_type_is_error() {
        assert!(SiteConfig::from_json(r#"{"features": "many"}"#).is_err());
    }

    #[test]
    fn test_parse_with_ignored_reports_unknown() {
        let (config, ignored) =
            SiteConfig::parse_with_ignored(r#"{"app": {"name": "A", "logo": "x"}, "colour": 1}"#)
                .unwrap();
        assert_eq!(config.app.unwrap().name, "A");
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|p| p == "colour"));
        assert!(ignored.iter().any(|p| p.starts_with("app") && p.ends_with("logo")));
    }

    #[test]
    fn test_fallback_values() {
        let config = SiteConfig::fallback();
        let app = config.app.as_ref().unwrap();
        assert_eq!(app.name, "My App");
        assert_eq!(
            app.tagline.as_deref(),
            Some("Experience the future of productivity")
        );
        assert_eq!(config.mode(), Mode::Marketing);
        assert!(config.features.is_none());
    }

    #[tokio::test]
    async fn test_load_missing_file_falls_back() {
        let temp = TempDir::new().unwrap();
        let source = ConfigSource::File(temp.path().join("config.json"));
        assert_eq!(SiteConfig::load(&source).await, SiteConfig::fallback());
    }

    #[tokio::test]
    async fn test_load_malformed_falls_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let source = ConfigSource::File(path);
        assert_eq!(SiteConfig::load(&source).await, SiteConfig::fallback());
    }

    #[tokio::test]
    async fn test_load_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"app": {"name": "Lumen"}}"#).unwrap();
        let config = SiteConfig::load(&ConfigSource::File(path)).await;
        assert_eq!(config.app.unwrap().name, "Lumen");
    }

    #[test]
    fn test_error_chain_includes_source() {
        let err = ConfigError::Io(
            "config.json".into(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let chain = error_chain(&err);
        assert!(chain.contains("config.json"));
        assert!(chain.ends_with("gone"));
    }
}
