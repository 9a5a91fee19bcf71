//! Element builder used by the section templates.
//!
//! ```ignore
//! let card = el("div")
//!     .class("feature-card")
//!     .child(el("h3").text(&feature.title))
//!     .build(doc);
//! ```

use super::{Document, NodeId};

enum Content {
    Element(El),
    Text(String),
}

/// Detached element description, materialized with [`El::build`].
pub struct El {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Content>,
}

/// Start building an element.
pub fn el(tag: &str) -> El {
    El {
        tag: tag.to_string(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl El {
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Open in a new browsing context with the safe-referrer pair.
    pub fn external(self, external: bool) -> Self {
        if external {
            self.attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
        } else {
            self
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    pub fn child(mut self, child: El) -> Self {
        self.children.push(Content::Element(child));
        self
    }

    pub fn maybe_child(self, child: Option<El>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Create the element (and its subtree) in `doc`, detached.
    pub fn build(self, doc: &mut Document) -> NodeId {
        let id = doc.create_element(&self.tag);
        for (name, value) in self.attrs {
            doc.set_attr(id, &name, value);
        }
        for child in self.children {
            let child_id = match child {
                Content::Element(el) => el.build(doc),
                Content::Text(text) => doc.create_text(text),
            };
            doc.append_child(id, child_id);
        }
        id
    }

    /// Build and append as the last child of `parent`.
    pub fn append_to(self, doc: &mut Document, parent: NodeId) -> NodeId {
        let id = self.build(doc);
        doc.append_child(parent, id);
        id
    }
}
