//! Navigation bar and hero section.

use super::list::{HERO_BUTTONS, NAVIGATION, href, render_list, set_text_by_id};
use crate::{
    config::{HeroButton, LinkItem, SiteConfig},
    dom::{Document, el},
};

const DEFAULT_BUTTON_STYLE: &str = "btn-primary";

pub fn populate_navigation(doc: &mut Document, config: &SiteConfig) {
    if let Some(app) = &config.app {
        set_text_by_id(doc, Some("app-name"), Some(&app.name));
    }

    render_list(
        doc,
        &NAVIGATION,
        None,
        config.navigation.as_deref(),
        |link: &LinkItem| {
            el("a")
                .attr("href", href(link.url.as_deref()))
                .text(&link.label)
                .external(link.external)
        },
        |_, _, _| {},
    );
}

pub fn populate_hero(doc: &mut Document, config: &SiteConfig) {
    if let Some(app) = &config.app {
        set_text_by_id(doc, Some("hero-title"), Some(&app.name));
        set_text_by_id(doc, Some("hero-subtitle"), app.tagline.as_deref());
        let page_title = format!("{} - {}", app.name, config.mode().title_suffix());
        set_text_by_id(doc, Some("page-title"), Some(&page_title));
    }

    let Some(hero) = &config.hero else {
        return;
    };

    // A hero without buttons still clears the static ones.
    let buttons = hero.buttons.as_deref().unwrap_or_default();
    render_list(
        doc,
        &HERO_BUTTONS,
        None,
        Some(buttons),
        |button: &HeroButton| {
            let style = button.style.as_deref().unwrap_or(DEFAULT_BUTTON_STYLE);
            el("a")
                .attr("href", href(button.url.as_deref()))
                .class(format!("btn {style}"))
                .text(&button.label)
                .external(button.external)
        },
        |_, _, _| {},
    );

    if let Some(image) = &hero.image
        && let Some(container) = doc.get_element_by_id("hero-image")
    {
        let alt = config.app.as_ref().map_or("", |app| app.name.as_str());
        doc.clear_children(container);
        el("img")
            .attr("src", image)
            .attr("alt", alt)
            .append_to(doc, container);
    }
}
