//! Hideable list sections: features, screenshots, downloads and FAQ.
//!
//! | Section     | Item element         | Listener                   |
//! |-------------|----------------------|----------------------------|
//! | features    | `div.feature-card`   |                            |
//! | screenshots | `div.screenshot-item`| `OpenLightbox` if flagged  |
//! | downloads   | `a.download-btn`     |                            |
//! | faq         | `div.faq-item`       | `ToggleActive`             |

use super::list::{
    DOWNLOADS, FAQ, FEATURES, ListOutcome, SCREENSHOTS, href, icon, render_list, set_text_by_id,
};
use crate::{
    config::{Download, FaqItem, Feature, Screenshot, SiteConfig},
    dom::{Document, Listener, el},
};

const DEFAULT_FEATURE_ICON: &str = "fas fa-star";
const DEFAULT_DOWNLOAD_ICON: &str = "fas fa-mobile-alt";
const DEFAULT_DOWNLOAD_LABEL: &str = "Download";
const DEFAULT_DOWNLOAD_PLATFORM: &str = "App Store";
const DEFAULT_SCREENSHOT_ALT: &str = "Screenshot";

pub fn populate_features(doc: &mut Document, config: &SiteConfig) {
    render_list(
        doc,
        &FEATURES,
        config.features_title.as_deref(),
        config.features.as_deref(),
        |feature: &Feature| {
            el("div")
                .class("feature-card")
                .child(
                    el("div")
                        .class("feature-icon")
                        .child(icon(feature.icon.as_deref().unwrap_or(DEFAULT_FEATURE_ICON))),
                )
                .child(el("h3").text(&feature.title))
                .child(el("p").text(&feature.description))
        },
        |_, _, _| {},
    );
}

pub fn populate_screenshots(doc: &mut Document, config: &SiteConfig) {
    render_list(
        doc,
        &SCREENSHOTS,
        config.screenshots_title.as_deref(),
        config.screenshots.as_deref(),
        |shot: &Screenshot| {
            el("div").class("screenshot-item").child(
                el("img")
                    .attr("src", &shot.url)
                    .attr("alt", shot.alt.as_deref().unwrap_or(DEFAULT_SCREENSHOT_ALT)),
            )
        },
        |doc, item, shot| {
            if shot.lightbox {
                doc.add_listener(
                    item,
                    Listener::OpenLightbox {
                        url: shot.url.clone(),
                    },
                );
            }
        },
    );
}

pub fn populate_downloads(doc: &mut Document, config: &SiteConfig) {
    let outcome = render_list(
        doc,
        &DOWNLOADS,
        config.download_title.as_deref(),
        config.downloads.as_deref(),
        |download: &Download| {
            let label = download.label.as_deref().unwrap_or(DEFAULT_DOWNLOAD_LABEL);
            let platform = download
                .platform
                .as_deref()
                .unwrap_or(DEFAULT_DOWNLOAD_PLATFORM);
            el("a")
                .attr("href", href(download.url.as_deref()))
                .class("download-btn")
                .child(
                    el("span")
                        .class("download-btn-icon")
                        .child(icon(download.icon.as_deref().unwrap_or(DEFAULT_DOWNLOAD_ICON))),
                )
                .child(
                    el("div")
                        .child(
                            el("div")
                                .attr("style", "font-size: 0.875rem; opacity: 0.8;")
                                .text(label),
                        )
                        .child(el("div").attr("style", "font-weight: 700;").text(platform)),
                )
                .external(download.external)
        },
        |_, _, _| {},
    );

    if outcome != ListOutcome::Hidden {
        set_text_by_id(
            doc,
            Some("download-subtitle"),
            config.download_subtitle.as_deref(),
        );
    }
}

pub fn populate_faq(doc: &mut Document, config: &SiteConfig) {
    render_list(
        doc,
        &FAQ,
        config.faq_title.as_deref(),
        config.faq.as_deref(),
        |item: &FaqItem| {
            el("div")
                .class("faq-item")
                .child(el("div").class("faq-question").text(&item.question))
                .child(
                    el("div")
                        .class("faq-answer")
                        .child(el("div").class("faq-answer-content").text(&item.answer)),
                )
        },
        |doc, item, _| doc.add_listener(item, Listener::ToggleActive),
    );
}
