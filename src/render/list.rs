//! Generic list rendering shared by every list-valued section.
//!
//! A [`ListTarget`] names the element ids a list touches. The policy is the
//! same everywhere:
//!
//! 1. list absent or empty and the target has a `section` → hide the section
//! 2. list absent and no `section` → leave the static markup untouched
//! 3. otherwise set the title (when given), clear the container, and append
//!    one child per item, in order

use crate::dom::{Document, El, NodeId};

/// Element ids a list renders into.
#[derive(Debug, Clone, Copy)]
pub struct ListTarget {
    /// Container hidden when the list is empty.
    pub section: Option<&'static str>,
    /// Heading replaced by the section title.
    pub title: Option<&'static str>,
    /// Element receiving one child per item.
    pub container: &'static str,
}

impl ListTarget {
    /// A list without a hideable section or heading.
    pub const fn bare(container: &'static str) -> Self {
        Self {
            section: None,
            title: None,
            container,
        }
    }
}

pub const NAVIGATION: ListTarget = ListTarget::bare("nav-links");
pub const HERO_BUTTONS: ListTarget = ListTarget::bare("hero-buttons");

pub const FEATURES: ListTarget = ListTarget {
    section: Some("features-section"),
    title: Some("features-title"),
    container: "features-grid",
};

pub const SCREENSHOTS: ListTarget = ListTarget {
    section: Some("screenshots-section"),
    title: Some("screenshots-title"),
    container: "screenshots-grid",
};

pub const DOWNLOADS: ListTarget = ListTarget {
    section: Some("download-section"),
    title: Some("download-title"),
    container: "download-buttons",
};

pub const SUPPORT: ListTarget = ListTarget {
    section: None,
    title: Some("support-title"),
    container: "support-grid",
};

pub const FAQ: ListTarget = ListTarget {
    section: Some("faq-section"),
    title: Some("faq-title"),
    container: "faq-list",
};

pub const FOOTER_LINKS: ListTarget = ListTarget::bare("footer-links");
pub const LEGAL_LINKS: ListTarget = ListTarget::bare("legal-links");
pub const SOCIAL_LINKS: ListTarget = ListTarget::bare("social-links");

/// What a list render did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// The section was hidden.
    Hidden,
    /// No data; static markup left as is.
    Untouched,
    /// The container was rebuilt with this many children.
    Rendered(usize),
}

/// Render `items` into `target` using `template` for each item.
///
/// `template` returns the item's element; `on_built` runs after the element
/// is attached, for wiring listeners.
pub fn render_list<T>(
    doc: &mut Document,
    target: &ListTarget,
    title: Option<&str>,
    items: Option<&[T]>,
    template: impl Fn(&T) -> El,
    mut on_built: impl FnMut(&mut Document, NodeId, &T),
) -> ListOutcome {
    let is_empty = items.is_none_or(<[T]>::is_empty);
    if is_empty && let Some(section) = target.section {
        if let Some(section) = doc.get_element_by_id(section) {
            doc.hide(section);
        }
        return ListOutcome::Hidden;
    }

    set_text_by_id(doc, target.title, title);

    let Some(items) = items else {
        return ListOutcome::Untouched;
    };
    let Some(container) = doc.get_element_by_id(target.container) else {
        return ListOutcome::Untouched;
    };

    doc.clear_children(container);
    for item in items {
        let id = template(item).append_to(doc, container);
        on_built(doc, id, item);
    }
    ListOutcome::Rendered(items.len())
}

/// Set the text of the element with id `id` when both exist.
pub fn set_text_by_id(doc: &mut Document, id: Option<&str>, text: Option<&str>) {
    if let (Some(id), Some(text)) = (id, text)
        && let Some(node) = doc.get_element_by_id(id)
    {
        doc.set_text(node, text);
    }
}

/// `url || '#'`.
pub fn href(url: Option<&str>) -> &str {
    url.filter(|u| !u.is_empty()).unwrap_or("#")
}

/// An `<i>` icon element with `class`.
pub fn icon(class: &str) -> El {
    crate::dom::el("i").class(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::el;

    const PAGE: &str = r#"<html><body>
        <section id="features-section"><h2 id="features-title">Static</h2>
            <div id="features-grid"><div>placeholder</div></div></section>
        <div id="nav-links"><a href="/">Static</a></div>
    </body></html>"#;

    fn item(text: &&str) -> El {
        el("div").text(*text)
    }

    #[test]
    fn test_empty_hides_section() {
        let mut doc = Document::parse(PAGE).unwrap();
        let items: [&str; 0] = [];
        let outcome = render_list(&mut doc, &FEATURES, Some("T"), Some(&items[..]), item, |_, _, _| {});
        assert_eq!(outcome, ListOutcome::Hidden);

        let section = doc.get_element_by_id("features-section").unwrap();
        assert!(doc.is_hidden(section));
        let title = doc.get_element_by_id("features-title").unwrap();
        assert_eq!(doc.text_content(title), "Static");
    }

    #[test]
    fn test_absent_hides_section() {
        let mut doc = Document::parse(PAGE).unwrap();
        let outcome = render_list::<&str>(&mut doc, &FEATURES, None, None, item, |_, _, _| {});
        assert_eq!(outcome, ListOutcome::Hidden);
    }

    #[test]
    fn test_absent_bare_list_untouched() {
        let mut doc = Document::parse(PAGE).unwrap();
        let outcome = render_list::<&str>(&mut doc, &NAVIGATION, None, None, item, |_, _, _| {});
        assert_eq!(outcome, ListOutcome::Untouched);
        let nav = doc.get_element_by_id("nav-links").unwrap();
        assert_eq!(doc.text_content(nav), "Static");
    }

    #[test]
    fn test_renders_items_in_order() {
        let mut doc = Document::parse(PAGE).unwrap();
        let items = ["one", "two", "three"];
        let mut seen = Vec::new();
        let outcome = render_list(&mut doc, &FEATURES, Some("New"), Some(&items[..]), item, |_, _, it| {
            seen.push(*it)
        });
        assert_eq!(outcome, ListOutcome::Rendered(3));
        assert_eq!(seen, items);

        let grid = doc.get_element_by_id("features-grid").unwrap();
        let texts: Vec<_> = doc
            .children(grid)
            .iter()
            .map(|&c| doc.text_content(c))
            .collect();
        assert_eq!(texts, items);
        let title = doc.get_element_by_id("features-title").unwrap();
        assert_eq!(doc.text_content(title), "New");
    }

    #[test]
    fn test_missing_title_keeps_heading() {
        let mut doc = Document::parse(PAGE).unwrap();
        render_list(&mut doc, &FEATURES, None, Some(&["x"][..]), item, |_, _, _| {});
        let title = doc.get_element_by_id("features-title").unwrap();
        assert_eq!(doc.text_content(title), "Static");
    }

    #[test]
    fn test_href_default() {
        assert_eq!(href(None), "#");
        assert_eq!(href(Some("")), "#");
        assert_eq!(href(Some("/a")), "/a");
    }
}
