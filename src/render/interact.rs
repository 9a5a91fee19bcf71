//! Interactivity wiring and the copyright year.
//!
//! | Target                 | Listener            |
//! |------------------------|---------------------|
//! | `#mobile-menu-toggle`  | `ToggleMenu`        |
//! | document root          | `CloseMenuOutside`  |
//! | every `a[href^="#"]`   | `SmoothScroll`      |
//!
//! [`attach_runtime`] appends the script that binds these listeners in a
//! browser once the page is serialized.

use super::list::set_text_by_id;
use crate::{
    dom::{Document, Listener, el},
    embed::page::{RUNTIME_JS, RuntimeVars},
    page::{ALERT_ACKNOWLEDGED, ALERT_FAILED, ALERT_SENT, LIGHTBOX_IMG_STYLE, LIGHTBOX_STYLE},
};

/// Id of the appended runtime `<script>`.
pub const RUNTIME_ID: &str = "showcase-runtime";

pub fn setup_interactivity(doc: &mut Document) {
    let toggle = doc.get_element_by_id("mobile-menu-toggle");
    let menu = doc.get_element_by_id("nav-links");

    if let (Some(toggle), Some(menu)) = (toggle, menu) {
        doc.add_listener(toggle, Listener::ToggleMenu { menu });
        // On the root so it runs after every other click handler.
        let root = doc.root();
        doc.add_listener(root, Listener::CloseMenuOutside { menu, toggle });
    }

    let anchors: Vec<_> = doc
        .descendants(doc.root())
        .filter(|&id| {
            doc.tag(id) == Some("a") && doc.attr(id, "href").is_some_and(|h| h.starts_with('#'))
        })
        .collect();
    for anchor in anchors {
        doc.add_listener(anchor, Listener::SmoothScroll);
    }
}

/// Append the page runtime to `<body>`. Does nothing without a body or
/// when the runtime is already present.
pub fn attach_runtime(doc: &mut Document) {
    let Some(body) = doc.body() else {
        return;
    };
    if doc.get_element_by_id(RUNTIME_ID).is_some() {
        return;
    }
    let script = RUNTIME_JS.render(&RuntimeVars {
        alert_sent: ALERT_SENT,
        alert_failed: ALERT_FAILED,
        alert_acknowledged: ALERT_ACKNOWLEDGED,
        lightbox_style: LIGHTBOX_STYLE,
        lightbox_img_style: LIGHTBOX_IMG_STYLE,
    });
    el("script").id(RUNTIME_ID).text(script).append_to(doc, body);
}

pub fn set_copyright_year(doc: &mut Document, year: i32) {
    set_text_by_id(doc, Some("copyright-year"), Some(&year.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<html><body>
        <button id="mobile-menu-toggle"></button>
        <div id="nav-links"><a href="#features">Features</a><a href="/docs">Docs</a><a href="#">Top</a></div>
        <span id="copyright-year">2000</span>
    </body></html>"##;

    #[test]
    fn test_menu_listeners() {
        let mut doc = Document::parse(PAGE).unwrap();
        setup_interactivity(&mut doc);

        let toggle = doc.get_element_by_id("mobile-menu-toggle").unwrap();
        let menu = doc.get_element_by_id("nav-links").unwrap();
        assert_eq!(doc.listeners(toggle), &[Listener::ToggleMenu { menu }]);
        assert_eq!(
            doc.listeners(doc.root()),
            &[Listener::CloseMenuOutside { menu, toggle }]
        );
    }

    #[test]
    fn test_same_page_anchors_only() {
        let mut doc = Document::parse(PAGE).unwrap();
        setup_interactivity(&mut doc);

        let menu = doc.get_element_by_id("nav-links").unwrap();
        let anchors = doc.children(menu).to_vec();
        assert_eq!(doc.listeners(anchors[0]), &[Listener::SmoothScroll]);
        assert!(doc.listeners(anchors[1]).is_empty());
        assert_eq!(doc.listeners(anchors[2]), &[Listener::SmoothScroll]);
    }

    #[test]
    fn test_missing_toggle_skips_menu() {
        let mut doc = Document::parse(r##"<html><body><a href="#x">x</a></body></html>"##).unwrap();
        setup_interactivity(&mut doc);
        assert!(doc.listeners(doc.root()).is_empty());
    }

    #[test]
    fn test_copyright_year() {
        let mut doc = Document::parse(PAGE).unwrap();
        set_copyright_year(&mut doc, 2031);
        let year = doc.get_element_by_id("copyright-year").unwrap();
        assert_eq!(doc.text_content(year), "2031");
    }

    #[test]
    fn test_runtime_attached_once() {
        let mut doc = Document::parse(PAGE).unwrap();
        attach_runtime(&mut doc);
        attach_runtime(&mut doc);

        let body = doc.body().unwrap();
        let scripts: Vec<_> = doc
            .element_children(body)
            .into_iter()
            .filter(|&id| doc.tag(id) == Some("script"))
            .collect();
        assert_eq!(scripts.len(), 1);
        assert!(doc.to_html().contains("[data-on~=\""));
    }
}
