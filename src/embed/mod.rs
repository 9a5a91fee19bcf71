//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `init` - Starter project files (`showcase init`)
//! - `page` - Runtime script binding rendered listeners in the browser
//! - `serve` - Preview server pages (404.html, contact form result)
//!
//! # Usage
//!
//! ```ignore
//! use embed::init::{STARTER_CONFIG, StarterVars};
//! use embed::serve::{NOT_FOUND_HTML, NotFoundVars};
//!
//! let json = STARTER_CONFIG.render(&StarterVars { name: "Orbit".into() });
//! let page = NOT_FOUND_HTML.render(&NotFoundVars { path: url.into() });
//! ```

mod template;

pub use template::{Template, TemplateVars};

/// Default page skeleton, used when no `build.skeleton` is configured.
pub const SKELETON_HTML: &str = include_str!("init/index.html");

pub mod init {
    use super::{Template, TemplateVars};

    /// Variables for the starter files.
    pub struct StarterVars {
        pub name: String,
    }

    impl TemplateVars for StarterVars {
        fn apply(&self, content: &str) -> String {
            // Placeholders sit inside JSON strings.
            let quoted = serde_json::to_string(&self.name).unwrap_or_default();
            let escaped = quoted
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(&self.name);
            content.replace("__APP_NAME__", escaped)
        }
    }

    /// Starter `config.json`.
    pub const STARTER_CONFIG: Template<StarterVars> =
        Template::new(include_str!("init/config.json"));

    /// Starter `showcase.toml`.
    pub const PROJECT_TOML: &str = include_str!("init/showcase.toml");
}

pub mod page {
    use super::{Template, TemplateVars};

    /// Strings the runtime shares with the in-process page host.
    pub struct RuntimeVars {
        pub alert_sent: &'static str,
        pub alert_failed: &'static str,
        pub alert_acknowledged: &'static str,
        pub lightbox_style: &'static str,
        pub lightbox_img_style: &'static str,
    }

    impl TemplateVars for RuntimeVars {
        fn apply(&self, content: &str) -> String {
            // Placeholders stand for whole JS string literals.
            let literal = |value: &str| serde_json::to_string(value).unwrap_or_default();
            content
                .replace("__ALERT_SENT__", &literal(self.alert_sent))
                .replace("__ALERT_FAILED__", &literal(self.alert_failed))
                .replace("__ALERT_ACKNOWLEDGED__", &literal(self.alert_acknowledged))
                .replace("__LIGHTBOX_STYLE__", &literal(self.lightbox_style))
                .replace("__LIGHTBOX_IMG_STYLE__", &literal(self.lightbox_img_style))
        }
    }

    /// Runtime appended to every rendered page.
    pub const RUNTIME_JS: Template<RuntimeVars> = Template::new(include_str!("page/runtime.js"));
}

pub mod serve {
    use super::{Template, TemplateVars};
    use crate::utils::html::escape;

    /// Variables for 404.html.
    pub struct NotFoundVars {
        pub path: String,
    }

    impl TemplateVars for NotFoundVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__PATH__", &escape(&self.path))
        }
    }

    /// Not-found page for the preview server.
    pub const NOT_FOUND_HTML: Template<NotFoundVars> =
        Template::new(include_str!("serve/404.html"));

    /// Variables for submitted.html.
    pub struct SubmittedVars {
        pub message: String,
    }

    impl TemplateVars for SubmittedVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__MESSAGE__", &escape(&self.message))
        }
    }

    /// Result page for a contact form posted to the preview server.
    pub const SUBMITTED_HTML: Template<SubmittedVars> =
        Template::new(include_str!("serve/submitted.html"));
}

#[cfg(test)]
mod tests {
    use super::init::*;
    use super::page::*;
    use super::serve::*;
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_starter_config_parses() {
        let json = STARTER_CONFIG.render(&StarterVars {
            name: "Say \"hi\"".into(),
        });
        let config = SiteConfig::from_json(&json).unwrap();
        assert_eq!(config.app.unwrap().name, "Say \"hi\"");
        assert!(config.contact_form.unwrap().enabled);
    }

    #[test]
    fn test_skeleton_has_every_target() {
        let doc = crate::dom::Document::parse(SKELETON_HTML).unwrap();
        for id in [
            "app-name",
            "nav-links",
            "mobile-menu-toggle",
            "hero-title",
            "hero-subtitle",
            "hero-buttons",
            "hero-image",
            "page-title",
            "features-section",
            "features-title",
            "features-grid",
            "screenshots-section",
            "screenshots-title",
            "screenshots-grid",
            "download-section",
            "download-title",
            "download-subtitle",
            "download-buttons",
            "support-section",
            "support-title",
            "support-grid",
            "contact-form",
            "faq-section",
            "faq-title",
            "faq-list",
            "footer-app-name",
            "footer-description",
            "footer-links",
            "social-links",
            "legal-links",
            "copyright-name",
            "copyright-year",
        ] {
            assert!(doc.get_element_by_id(id).is_some(), "missing #{id}");
        }
    }

    #[test]
    fn test_not_found_escapes_path() {
        let page = NOT_FOUND_HTML.render(&NotFoundVars {
            path: "/<script>".into(),
        });
        assert!(page.contains("<code>/&lt;script&gt;</code>"));
    }

    #[test]
    fn test_runtime_literals_are_quoted() {
        let js = RUNTIME_JS.render(&RuntimeVars {
            alert_sent: "Sent \"ok\"",
            alert_failed: "Failed",
            alert_acknowledged: "Thanks",
            lightbox_style: "position: fixed;",
            lightbox_img_style: "max-width: 90%;",
        });
        assert!(js.contains(r#"var ALERT_SENT = "Sent \"ok\"";"#));
        assert!(js.contains(r#"var LIGHTBOX_STYLE = "position: fixed;";"#));
        assert!(!js.contains("__"));
        assert!(!js.contains("</"));
    }
}
