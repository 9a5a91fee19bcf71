//! Skeleton HTML parsing via `tl`.

use super::{Document, NodeId};
use crate::utils::html::unescape;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("failed to parse HTML skeleton: {0}")]
    Parse(String),
}

impl Document {
    /// Parse a full HTML page (doctype optional) into a document.
    pub fn parse(html: &str) -> Result<Self, DomError> {
        let (doctype, body) = split_doctype(html);

        let dom = tl::parse(body, tl::ParserOptions::default())
            .map_err(|e| DomError::Parse(format!("{e:?}")))?;
        let parser = dom.parser();

        let mut doc = Document::new();
        doc.doctype = doctype.map(str::to_string);
        let root = doc.root();
        for handle in dom.children() {
            if let Some(node) = convert(&mut doc, *handle, parser) {
                doc.append_child(root, node);
            }
        }
        Ok(doc)
    }
}

/// Strip a leading `<!DOCTYPE ...>` which `tl` would otherwise treat as a tag.
fn split_doctype(html: &str) -> (Option<&str>, &str) {
    let trimmed = html.trim_start();
    let is_doctype = trimmed
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"));
    if !is_doctype {
        return (None, html);
    }
    match trimmed.find('>') {
        Some(end) => (Some(trimmed[2..end].trim()), &trimmed[end + 1..]),
        None => (None, html),
    }
}

fn convert(doc: &mut Document, handle: tl::NodeHandle, parser: &tl::Parser) -> Option<NodeId> {
    match handle.get(parser)? {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_ascii_lowercase();
            let id = doc.create_element(&name);

            for (key, value) in tag.attributes().iter() {
                let value = value.map(|v| unescape(&v).into_owned()).unwrap_or_default();
                doc.set_attr(id, key.as_ref(), value);
            }

            for child in tag.children().top().iter() {
                if let Some(child_id) = convert(doc, *child, parser) {
                    doc.append_child(id, child_id);
                }
            }
            Some(id)
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            Some(doc.create_text(unescape(&text).into_owned()))
        }
        tl::Node::Comment(bytes) => {
            let raw = bytes.as_utf8_str();
            let inner = raw
                .trim_start_matches("<!--")
                .trim_end_matches("-->")
                .to_string();
            Some(doc.create_comment(inner))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><title id="page-title">Loading</title></head>
<body>
  <!-- nav -->
  <nav><div id="nav-links" class="nav-links"><a href="#features">Features</a></div></nav>
  <p id="footer-description">Fish &amp; chips</p>
  <img id="logo" src="logo.png" alt="">
</body>
</html>"##;

    #[test]
    fn test_parse_finds_ids() {
        let doc = Document::parse(PAGE).unwrap();
        assert!(doc.get_element_by_id("page-title").is_some());
        let nav = doc.get_element_by_id("nav-links").unwrap();
        assert!(doc.has_class(nav, "nav-links"));
        assert_eq!(doc.element_children(nav).len(), 1);
    }

    #[test]
    fn test_parse_unescapes_text() {
        let doc = Document::parse(PAGE).unwrap();
        let p = doc.get_element_by_id("footer-description").unwrap();
        assert_eq!(doc.text_content(p), "Fish & chips");
    }

    #[test]
    fn test_parse_keeps_doctype_out_of_tree() {
        let doc = Document::parse(PAGE).unwrap();
        assert_eq!(doc.doctype.as_deref(), Some("DOCTYPE html"));
        let html = doc.document_element().unwrap();
        assert_eq!(doc.tag(html), Some("html"));
        assert_eq!(doc.attr(html, "lang"), Some("en"));
    }

    #[test]
    fn test_split_doctype_without_doctype() {
        assert_eq!(split_doctype("<p>hi</p>"), (None, "<p>hi</p>"));
    }
}
