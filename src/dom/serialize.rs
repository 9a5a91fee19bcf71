//! Document -> HTML serialization.
//!
//! Listeners become a `data-on` attribute listing their tokens, plus the
//! payload attributes the page runtime needs (see [`super::event`]).

use super::{Document, Listener, NodeData, NodeId};
use crate::utils::html::{escape, escape_attr, is_raw_text_element, is_void_element};
use rustc_hash::FxHashMap;

/// Attribute carrying listener tokens.
pub const LISTENER_ATTR: &str = "data-on";

/// Listener tokens and payload attributes for one element.
#[derive(Debug, Default)]
struct Markers {
    tokens: Vec<&'static str>,
    attrs: Vec<(&'static str, String)>,
}

impl Markers {
    fn push_attr(&mut self, name: &'static str, value: String) {
        if !self.attrs.iter().any(|(existing, _)| *existing == name) {
            self.attrs.push((name, value));
        }
    }
}

impl Document {
    /// Serialize the whole document, including the doctype.
    pub fn to_html(&self) -> String {
        let markers = self.markers();
        let mut out = String::with_capacity(self.nodes.len() * 32);
        if let Some(doctype) = &self.doctype {
            out.push_str("<!");
            out.push_str(doctype);
            out.push('>');
        }
        for &child in self.children(self.root()) {
            self.write_node(child, false, &markers, &mut out);
        }
        out
    }

    /// Serialize one node and its subtree (`outerHTML`).
    pub fn outer_html(&self, id: NodeId) -> String {
        let markers = self.markers();
        let mut out = String::new();
        self.write_node(id, false, &markers, &mut out);
        out
    }

    /// Collect markers per element, in node order.
    ///
    /// The outside-click menu listener lives on the root, which is never
    /// serialized, so its token is written on the menu toggle instead.
    fn markers(&self) -> FxHashMap<NodeId, Markers> {
        let mut nodes: Vec<NodeId> = self.listeners.keys().copied().collect();
        nodes.sort_unstable();

        let mut markers: FxHashMap<NodeId, Markers> = FxHashMap::default();
        let mut relocated = Vec::new();
        for node in nodes {
            for listener in self.listeners(node) {
                let host = match listener {
                    Listener::CloseMenuOutside { toggle, .. } => {
                        relocated.push((*toggle, listener));
                        continue;
                    }
                    _ => node,
                };
                self.add_marker(markers.entry(host).or_default(), listener);
            }
        }
        for (host, listener) in relocated {
            self.add_marker(markers.entry(host).or_default(), listener);
        }
        markers
    }

    fn add_marker(&self, marker: &mut Markers, listener: &Listener) {
        marker.tokens.push(listener.token());
        match listener {
            Listener::OpenLightbox { url } => marker.push_attr("data-lightbox-src", url.clone()),
            Listener::ToggleMenu { menu } | Listener::CloseMenuOutside { menu, .. } => {
                if let Some(id) = self.attr(*menu, "id") {
                    marker.push_attr("data-menu", id.to_string());
                }
            }
            _ => {}
        }
    }

    fn write_node(
        &self,
        id: NodeId,
        raw_text: bool,
        markers: &FxHashMap<NodeId, Markers>,
        out: &mut String,
    ) {
        match self.data(id) {
            NodeData::Document => {
                for &child in self.children(id) {
                    self.write_node(child, false, markers, out);
                }
            }
            NodeData::Text(text) if raw_text => out.push_str(text),
            NodeData::Text(text) => out.push_str(&escape(text)),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attrs {
                    write_attr(name, value, out);
                }
                if let Some(marker) = markers.get(&id) {
                    write_attr(LISTENER_ATTR, &marker.tokens.join(" "), out);
                    for (name, value) in &marker.attrs {
                        write_attr(name, value, out);
                    }
                }
                out.push('>');

                if is_void_element(&el.tag) {
                    return;
                }

                let raw = is_raw_text_element(&el.tag);
                for &child in self.children(id) {
                    self.write_node(child, raw, markers, out);
                }

                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

fn write_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::super::el;
    use super::*;

    #[test]
    fn test_round_trip_keeps_structure() {
        let src = "<!DOCTYPE html><html><body><div id=\"a\">hi</div></body></html>";
        let doc = Document::parse(src).unwrap();
        assert_eq!(doc.to_html(), src);
    }

    #[test]
    fn test_escapes_text_and_attrs() {
        let mut doc = Document::new();
        let root = doc.root();
        el("a")
            .attr("title", "\"quoted\" & more")
            .text("<script>alert(1)</script>")
            .append_to(&mut doc, root);
        assert_eq!(
            doc.to_html(),
            "<a title=\"&quot;quoted&quot; &amp; more\">&lt;script&gt;alert(1)&lt;/script&gt;</a>"
        );
    }

    #[test]
    fn test_void_and_boolean_attrs() {
        let mut doc = Document::new();
        let root = doc.root();
        let input = el("input").attr("type", "text").attr("required", "").append_to(&mut doc, root);
        assert_eq!(doc.outer_html(input), "<input type=\"text\" required>");
    }

    #[test]
    fn test_script_content_is_raw() {
        let mut doc = Document::new();
        let root = doc.root();
        el("script").text("if (a < b) {}").append_to(&mut doc, root);
        assert_eq!(doc.to_html(), "<script>if (a < b) {}</script>");
    }

    #[test]
    fn test_listeners_become_markers() {
        let mut doc = Document::new();
        let root = doc.root();
        let nav = el("div").id("nav-links").append_to(&mut doc, root);
        let toggle = el("button").id("mobile-menu-toggle").append_to(&mut doc, root);
        let shot = el("img").attr("src", "a.png").append_to(&mut doc, root);
        doc.add_listener(toggle, Listener::ToggleMenu { menu: nav });
        doc.add_listener(root, Listener::CloseMenuOutside { menu: nav, toggle });
        doc.add_listener(shot, Listener::OpenLightbox { url: "a.png".into() });

        assert_eq!(
            doc.outer_html(toggle),
            "<button id=\"mobile-menu-toggle\" data-on=\"toggle-menu close-menu-outside\" data-menu=\"nav-links\"></button>"
        );
        assert_eq!(
            doc.outer_html(shot),
            "<img src=\"a.png\" data-on=\"open-lightbox\" data-lightbox-src=\"a.png\">"
        );
        assert_eq!(doc.outer_html(nav), "<div id=\"nav-links\"></div>");
    }
}
