//! URL to filesystem path resolution.

use crate::render::support::FORM_ACTION;
use percent_encoding::percent_decode_str;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

/// Whether `url` asks for the page itself (`/`, `/index.html`).
pub fn is_page_request(url: &str) -> bool {
    matches!(normalize_url(url).as_str(), "" | "index.html")
}

/// Whether `url` is the contact form's post target.
pub fn is_contact_request(url: &str) -> bool {
    normalize_url(url) == FORM_ACTION.trim_matches('/')
}

/// Resolve URL to a file under `serve_root`.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    // Reject paths with suspicious patterns early
    if clean.is_empty() || clean.contains("..") {
        return None;
    }

    // Canonicalize to resolve symlinks and verify path is under serve_root
    let canonical = serve_root.join(&clean).canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    (canonical.starts_with(&root_canonical) && canonical.is_file()).then_some(canonical)
}

/// Normalize URL: decode, strip query string and fragment, trim slashes
fn normalize_url(url: &str) -> String {
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(Cow::into_owned)
        .unwrap_or_default();

    let path = decoded.split(['?', '#']).next().unwrap_or_default();
    path.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_page_requests() {
        assert!(is_page_request("/"));
        assert!(is_page_request("/index.html"));
        assert!(is_page_request("/?utm_source=x"));
        assert!(!is_page_request("/shot.png"));
    }

    #[test]
    fn test_contact_requests() {
        assert!(is_contact_request("/contact"));
        assert!(is_contact_request("/contact/?from=nav"));
        assert!(!is_contact_request("/contact.html"));
        assert!(!is_contact_request("/"));
    }

    #[test]
    fn test_resolves_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("img")).unwrap();
        fs::write(temp.path().join("img/hero shot.png"), b"png").unwrap();

        let found = resolve_path("/img/hero%20shot.png?v=2", temp.path()).unwrap();
        assert!(found.ends_with("img/hero shot.png"));
        assert!(resolve_path("/img", temp.path()).is_none());
        assert!(resolve_path("/missing.png", temp.path()).is_none());
    }

    #[test]
    fn test_rejects_traversal() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("public");
        fs::create_dir(&root).unwrap();
        fs::write(temp.path().join("secret.txt"), "x").unwrap();

        assert!(resolve_path("/../secret.txt", &root).is_none());
        assert!(resolve_path("/%2e%2e/secret.txt", &root).is_none());
    }
}
