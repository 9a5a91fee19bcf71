//! Footer identity, link lists and social icons.

use super::list::{FOOTER_LINKS, LEGAL_LINKS, SOCIAL_LINKS, href, icon, render_list, set_text_by_id};
use crate::{
    config::{LinkItem, SiteConfig, SocialLink},
    dom::{Document, El, el},
};

const DEFAULT_SOCIAL_ICON: &str = "fas fa-link";

pub fn populate_footer(doc: &mut Document, config: &SiteConfig) {
    if let Some(app) = &config.app {
        set_text_by_id(doc, Some("footer-app-name"), Some(&app.name));
        set_text_by_id(doc, Some("footer-description"), app.description.as_deref());
        set_text_by_id(doc, Some("copyright-name"), Some(&app.name));
    }

    let footer = config.footer.as_ref();
    let links = footer.and_then(|f| f.links.as_deref());
    let legal = footer.and_then(|f| f.legal.as_deref());

    render_list(doc, &FOOTER_LINKS, None, links, list_link, |_, _, _| {});
    render_list(
        doc,
        &SOCIAL_LINKS,
        None,
        config.social.as_deref(),
        |social: &SocialLink| {
            el("a")
                .attr("href", href(social.url.as_deref()))
                .class("social-link")
                .child(icon(social.icon.as_deref().unwrap_or(DEFAULT_SOCIAL_ICON)))
                .attr("title", social.name.as_deref().unwrap_or_default())
                .external(social.external)
        },
        |_, _, _| {},
    );
    render_list(doc, &LEGAL_LINKS, None, legal, list_link, |_, _, _| {});
}

/// `<li><a href>label</a></li>`
fn list_link(link: &LinkItem) -> El {
    el("li").child(
        el("a")
            .attr("href", href(link.url.as_deref()))
            .text(&link.label)
            .external(link.external),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body><footer>
        <h3 id="footer-app-name">App</h3><p id="footer-description">Desc</p>
        <ul id="footer-links"><li>static</li></ul>
        <div id="social-links"></div>
        <ul id="legal-links"><li>legal</li></ul>
        <p>&copy; <span id="copyright-year">2000</span> <span id="copyright-name">App</span></p>
    </footer></body></html>"#;

    #[test]
    fn test_identity_from_app() {
        let mut doc = Document::parse(PAGE).unwrap();
        populate_footer(&mut doc, &SiteConfig::fallback());

        for (id, text) in [
            ("footer-app-name", "My App"),
            ("footer-description", "A beautiful app for all your needs"),
            ("copyright-name", "My App"),
        ] {
            let node = doc.get_element_by_id(id).unwrap();
            assert_eq!(doc.text_content(node), text);
        }
        let links = doc.get_element_by_id("footer-links").unwrap();
        assert_eq!(doc.text_content(links), "static");
    }

    #[test]
    fn test_link_lists() {
        let mut doc = Document::parse(PAGE).unwrap();
        let config = SiteConfig::from_json(
            r#"{
                "footer": {
                    "links": [{"label": "Blog", "url": "/blog"}],
                    "legal": [{"label": "Privacy", "url": "https://example.com/privacy", "external": true}]
                },
                "social": [{"name": "Mastodon", "url": "https://social.example", "icon": "fab fa-mastodon", "external": true}, {}]
            }"#,
        )
        .unwrap();
        populate_footer(&mut doc, &config);

        let links = doc.get_element_by_id("footer-links").unwrap();
        assert_eq!(
            doc.outer_html(links),
            r#"<ul id="footer-links"><li><a href="/blog">Blog</a></li></ul>"#
        );

        let legal = doc.get_element_by_id("legal-links").unwrap();
        let anchor = doc.children(doc.children(legal)[0])[0];
        assert_eq!(doc.attr(anchor, "target"), Some("_blank"));
        assert_eq!(doc.attr(anchor, "rel"), Some("noopener noreferrer"));

        let social = doc.get_element_by_id("social-links").unwrap();
        let icons = doc.children(social).to_vec();
        assert_eq!(icons.len(), 2);
        assert_eq!(doc.attr(icons[0], "title"), Some("Mastodon"));
        assert_eq!(doc.attr(icons[0], "class"), Some("social-link"));
        assert_eq!(doc.attr(icons[1], "href"), Some("#"));
        let default_icon = doc.children(icons[1])[0];
        assert_eq!(doc.attr(default_icon, "class"), Some("fas fa-link"));
    }
}
