//! Structural warnings for a parsed SiteConfig.
//!
//! Rendering tolerates every one of these; `showcase check` surfaces them so
//! a site author notices before publishing.

use super::{Diagnostics, FormHandler, SiteConfig};

impl SiteConfig {
    /// Collect warnings about content that will render oddly or not at all.
    pub fn lint(&self) -> Diagnostics {
        let mut diag = Diagnostics::new();

        if self.app.as_ref().is_none_or(|app| app.name.trim().is_empty()) {
            diag.warn_with_hint(
                "app.name",
                "missing app name; title, hero and footer will be blank",
                "set `app.name`",
            );
        }

        self.lint_contact_form(&mut diag);

        for (i, link) in self.navigation.iter().flatten().enumerate() {
            if link.label.is_empty() {
                diag.warn(format!("navigation[{i}].label"), "link without a label");
            }
        }
        for (i, feature) in self.features.iter().flatten().enumerate() {
            if feature.title.is_empty() {
                diag.warn(format!("features[{i}].title"), "feature without a title");
            }
        }
        for (i, shot) in self.screenshots.iter().flatten().enumerate() {
            if shot.url.is_empty() {
                diag.warn(format!("screenshots[{i}].url"), "screenshot without an image url");
            }
        }
        for (i, item) in self.faq.iter().flatten().enumerate() {
            if item.question.is_empty() {
                diag.warn(format!("faq[{i}].question"), "FAQ entry without a question");
            }
            if item.answer.is_empty() {
                diag.warn(format!("faq[{i}].answer"), "FAQ entry without an answer");
            }
        }

        diag
    }

    fn lint_contact_form(&self, diag: &mut Diagnostics) {
        let Some(form) = self.contact_form.as_ref().filter(|f| f.enabled) else {
            return;
        };
        match form.handler {
            Some(FormHandler::Email) if form.email.as_deref().is_none_or(str::is_empty) => {
                diag.warn_with_hint(
                    "contactForm.email",
                    "handler is `email` but no address is set",
                    "set `contactForm.email`",
                );
            }
            Some(FormHandler::Api) if form.api_url.as_deref().is_none_or(str::is_empty) => {
                diag.warn_with_hint(
                    "contactForm.apiUrl",
                    "handler is `api` but no endpoint is set; every submission will fail",
                    "set `contactForm.apiUrl`",
                );
            }
            Some(FormHandler::Unknown) => {
                diag.warn_with_hint(
                    "contactForm.handler",
                    "unrecognized handler; submissions are only acknowledged",
                    "use `email` or `api`",
                );
            }
            _ => {}
        }
    }
}
