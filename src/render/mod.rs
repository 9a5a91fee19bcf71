//! Populate a page skeleton from a [`SiteConfig`].
//!
//! # Order
//!
//! ```text
//! theme → navigation → hero → features → screenshots → downloads
//!       → support (+ contact form) → faq → footer → interactivity → year
//! ```
//!
//! Every step reads the same immutable config and touches only its own
//! element ids. A missing target element skips that sub-step.
//!
//! # Module Structure
//!
//! | Module     | Sections                                      |
//! |------------|-----------------------------------------------|
//! | `list`     | generic list renderer + section table         |
//! | `theme`    | CSS custom properties                         |
//! | `hero`     | navigation bar, hero                          |
//! | `sections` | features, screenshots, downloads, FAQ         |
//! | `support`  | support cards, contact form                   |
//! | `footer`   | footer identity and link lists                |
//! | `interact` | menu / anchor listeners, copyright year       |

mod footer;
mod hero;
mod interact;
pub mod list;
mod sections;
pub mod support;
mod theme;

pub use interact::attach_runtime;

use crate::{config::SiteConfig, debug, dom::Document};

/// Renders one config into any number of skeletons.
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    config: &'a SiteConfig,
    year: i32,
}

impl<'a> Renderer<'a> {
    /// `year` fills `#copyright-year`.
    pub fn new(config: &'a SiteConfig, year: i32) -> Self {
        Self { config, year }
    }

    pub fn render(&self, doc: &mut Document) {
        let config = self.config;
        debug!("render"; "mode {:?}, year {}", config.mode(), self.year);

        theme::apply_theme(doc, config);
        hero::populate_navigation(doc, config);
        hero::populate_hero(doc, config);
        sections::populate_features(doc, config);
        sections::populate_screenshots(doc, config);
        sections::populate_downloads(doc, config);
        support::populate_support(doc, config);
        sections::populate_faq(doc, config);
        footer::populate_footer(doc, config);
        interact::setup_interactivity(doc);
        interact::set_copyright_year(doc, self.year);
    }
}
