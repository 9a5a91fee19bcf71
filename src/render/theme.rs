//! Theme colors as CSS custom properties on the root element.

use crate::{config::SiteConfig, dom::Document};

/// Apply `theme.primaryColor` / `theme.secondaryColor`.
pub fn apply_theme(doc: &mut Document, config: &SiteConfig) {
    let Some(theme) = &config.theme else {
        return;
    };
    let Some(root) = doc.document_element() else {
        return;
    };

    if let Some(primary) = &theme.primary_color {
        doc.set_style(root, "--primary-color", primary);
        doc.set_style(root, "--primary-dark", &darken_color(primary));
    }
    if let Some(secondary) = &theme.secondary_color {
        doc.set_style(root, "--secondary-color", secondary);
    }
}

/// Darker variant of a color for hover states. Returns its input unchanged.
pub fn darken_color(color: &str) -> String {
    color.to_string()
}
