//! In-memory HTML document the renderer mutates.
//!
//! # Module Structure
//!
//! ```text
//! dom/
//! ├── build      # El builder for template insertion
//! ├── event      # Listener kinds attached to nodes
//! ├── parse      # skeleton HTML -> Document (via tl)
//! ├── serialize  # Document -> HTML
//! └── mod.rs     # Document arena (this file)
//! ```
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Detached nodes
//! keep their slot; they simply stop being reachable from the root.

mod build;
mod event;
mod parse;
mod serialize;

pub use build::{El, el};
pub use event::{EventKind, Listener};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Handle to a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// The synthetic document node at the root of the tree.
    Document,
    Element(Element),
    Text(String),
    Comment(String),
}

/// An element: tag name, ordered attributes, and the form `value` property.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    /// Live value of form controls (not serialized, like the DOM property).
    pub value: String,
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

/// Arena-backed document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    doctype: Option<String>,
    listeners: FxHashMap<NodeId, SmallVec<[Listener; 2]>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                data: NodeData::Document,
                parent: None,
                children: SmallVec::new(),
            }],
            doctype: None,
            listeners: FxHashMap::default(),
        }
    }

    /// The document node.
    #[inline]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The `<html>` element, falling back to the first root element.
    pub fn document_element(&self) -> Option<NodeId> {
        let root = self.root();
        self.children(root)
            .iter()
            .copied()
            .find(|&id| self.tag(id) == Some("html"))
            .or_else(|| {
                self.children(root)
                    .iter()
                    .copied()
                    .find(|&id| self.is_element(id))
            })
    }

    /// The `<body>` element, if the skeleton has one.
    pub fn body(&self) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|&id| self.tag(id) == Some("body"))
    }

    // ------------------------------------------------------------------------
    // node creation
    // ------------------------------------------------------------------------

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: None,
            children: SmallVec::new(),
        });
        id
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(Element {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            value: String::new(),
        }))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Text(text.into()))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Comment(text.into()))
    }

    // ------------------------------------------------------------------------
    // tree structure
    // ------------------------------------------------------------------------

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Child elements only (text and comments skipped).
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.is_element(c))
            .collect()
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Remove a node from its parent. The node and its subtree stay valid.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }
    }

    /// Remove every child of `id` (`innerHTML = ''`).
    pub fn clear_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.nodes[id.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Whether the node is still reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.ancestors(id).last() == Some(self.root())
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&n| self.parent(n))
    }

    /// Whether `node` is `ancestor` or lies inside it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|n| n == ancestor)
    }

    /// Depth-first, document-order iterator over the descendants of `id`.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev().copied());
            Some(next)
        })
    }

    /// Find an attached element by its `id` attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|&n| self.attr(n, "id") == Some(id))
    }

    // ------------------------------------------------------------------------
    // element access
    // ------------------------------------------------------------------------

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].data {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].data {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let Some(el) = self.element_mut(id) else {
            return;
        };
        match el.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => el.attrs.push((name.to_string(), value)),
        }
    }

    // ------------------------------------------------------------------------
    // text
    // ------------------------------------------------------------------------

    /// Concatenated text of the node and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        if let NodeData::Text(text) = self.data(id) {
            return text.clone();
        }
        self.descendants(id)
            .filter_map(|n| match self.data(n) {
                NodeData::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replace all children with a single text node (`textContent = ...`).
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.clear_children(id);
        let text = self.create_text(text);
        self.append_child(id, text);
    }

    // ------------------------------------------------------------------------
    // classes
    // ------------------------------------------------------------------------

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let classes = match self.attr(id, "class") {
            Some(c) if !c.trim().is_empty() => format!("{} {class}", c.trim()),
            _ => class.to_string(),
        };
        self.set_attr(id, "class", classes);
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        let Some(current) = self.attr(id, "class") else {
            return;
        };
        let kept: Vec<&str> = current
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect();
        let kept = kept.join(" ");
        self.set_attr(id, "class", kept);
    }

    /// Toggle a class, returning whether it is now present.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    // ------------------------------------------------------------------------
    // inline style
    // ------------------------------------------------------------------------

    /// Read one property from the inline `style` attribute.
    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        parse_style(self.attr(id, "style")?)
            .into_iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v)
    }

    /// Set one property on the inline `style` attribute.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        let mut decls = self.attr(id, "style").map(parse_style).unwrap_or_default();
        match decls.iter_mut().find(|(k, _)| k == property) {
            Some((_, v)) => *v = value.to_string(),
            None => decls.push((property.to_string(), value.to_string())),
        }
        let style: Vec<String> = decls.iter().map(|(k, v)| format!("{k}: {v};")).collect();
        self.set_attr(id, "style", style.join(" "));
    }

    /// `style.display = 'none'`.
    pub fn hide(&mut self, id: NodeId) {
        self.set_style(id, "display", "none");
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.style(id, "display").as_deref() == Some("none")
    }

    // ------------------------------------------------------------------------
    // form values
    // ------------------------------------------------------------------------

    pub fn value(&self, id: NodeId) -> &str {
        self.element(id).map_or("", |el| el.value.as_str())
    }

    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(el) = self.element_mut(id) {
            el.value = value.into();
        }
    }

    // ------------------------------------------------------------------------
    // listeners
    // ------------------------------------------------------------------------

    pub fn add_listener(&mut self, id: NodeId, listener: Listener) {
        self.listeners.entry(id).or_default().push(listener);
    }

    pub fn listeners(&self, id: NodeId) -> &[Listener] {
        self.listeners
            .get(&id)
            .map(|l| l.as_slice())
            .unwrap_or(&[])
    }
}

/// Split a `style` attribute into `(property, value)` pairs.
fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (k, v) = decl.split_once(':')?;
            let k = k.trim();
            (!k.is_empty()).then(|| (k.to_string(), v.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let html = doc.create_element("html");
        let body = doc.create_element("body");
        let div = doc.create_element("div");
        doc.append_child(doc.root(), html);
        doc.append_child(html, body);
        doc.append_child(body, div);
        doc.set_attr(div, "id", "grid");
        (doc, html, body, div)
    }

    #[test]
    fn test_lookup_by_id_skips_detached() {
        let (mut doc, _, _, div) = sample();
        assert_eq!(doc.get_element_by_id("grid"), Some(div));
        doc.detach(div);
        assert_eq!(doc.get_element_by_id("grid"), None);
        assert!(!doc.is_attached(div));
    }

    #[test]
    fn test_document_element_and_body() {
        let (doc, html, body, _) = sample();
        assert_eq!(doc.document_element(), Some(html));
        assert_eq!(doc.body(), Some(body));
    }

    #[test]
    fn test_append_moves_node() {
        let (mut doc, html, body, div) = sample();
        doc.append_child(html, div);
        assert!(doc.children(body).is_empty());
        assert_eq!(doc.children(html), &[body, div]);
        assert_eq!(doc.parent(div), Some(html));
    }

    #[test]
    fn test_set_text_replaces_children() {
        let (mut doc, _, body, div) = sample();
        doc.set_text(body, "hello");
        assert_eq!(doc.text_content(body), "hello");
        assert_eq!(doc.children(body).len(), 1);
        assert!(!doc.is_attached(div));
    }

    #[test]
    fn test_class_helpers() {
        let (mut doc, _, _, div) = sample();
        doc.set_attr(div, "class", "faq-item");
        assert!(doc.toggle_class(div, "active"));
        assert_eq!(doc.attr(div, "class"), Some("faq-item active"));
        assert!(!doc.toggle_class(div, "active"));
        assert_eq!(doc.attr(div, "class"), Some("faq-item"));
        doc.add_class(div, "faq-item");
        assert_eq!(doc.attr(div, "class"), Some("faq-item"));
    }

    #[test]
    fn test_style_helpers() {
        let (mut doc, _, _, div) = sample();
        doc.set_attr(div, "style", "color: red;");
        doc.hide(div);
        assert!(doc.is_hidden(div));
        assert_eq!(doc.style(div, "color").as_deref(), Some("red"));
        doc.set_style(div, "display", "block");
        assert!(!doc.is_hidden(div));
        assert_eq!(doc.attr(div, "style"), Some("color: red; display: block;"));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let (doc, html, body, div) = sample();
        assert!(doc.contains(body, div));
        assert!(doc.contains(div, div));
        assert!(!doc.contains(div, html));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let (doc, html, body, div) = sample();
        let order: Vec<_> = doc.descendants(doc.root()).collect();
        assert_eq!(order, vec![html, body, div]);
    }
}
