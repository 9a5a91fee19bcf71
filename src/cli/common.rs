//! Common utilities shared across CLI commands.

use crate::{
    config::{ProjectConfig, SiteConfig},
    debug,
    dom::Document,
    embed::SKELETON_HTML,
    render::{Renderer, attach_runtime},
};
use anyhow::{Context, Result};
use chrono::Datelike;
use std::fs;

/// Single-threaded runtime for the config fetch and form posts.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")
}

/// Current local year for `#copyright-year`.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Parse the configured skeleton, or the embedded one.
pub fn load_skeleton(project: &ProjectConfig) -> Result<Document> {
    let Some(path) = project.skeleton_path() else {
        debug!("build"; "using embedded skeleton");
        return Ok(Document::parse(SKELETON_HTML)?);
    };
    let html = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read skeleton '{}'", path.display()))?;
    Document::parse(&html).with_context(|| format!("Failed to parse skeleton '{}'", path.display()))
}

/// Load the page config (falling back on failure) and render it into the
/// skeleton.
pub fn render_document(
    project: &ProjectConfig,
    runtime: &tokio::runtime::Runtime,
) -> Result<(Document, SiteConfig)> {
    let mut doc = load_skeleton(project)?;
    let config = runtime.block_on(SiteConfig::load(&project.config_source()));
    Renderer::new(&config, current_year()).render(&mut doc);
    Ok((doc, config))
}

/// Render the page and serialize it with the page runtime attached.
pub fn render_page(project: &ProjectConfig, runtime: &tokio::runtime::Runtime) -> Result<String> {
    let (mut doc, _) = render_document(project, runtime)?;
    attach_runtime(&mut doc);
    Ok(doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(root: &std::path::Path) -> ProjectConfig {
        ProjectConfig {
            root: root.to_path_buf(),
            ..ProjectConfig::default()
        }
    }

    #[test]
    fn test_render_page_from_files() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.json"),
            r#"{"app": {"name": "Harbor"}, "mode": "support"}"#,
        )
        .unwrap();

        let html = render_page(&project(temp.path()), &runtime().unwrap()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<title id="page-title">Harbor - Support</title>"#));
        assert!(html.contains(r#"<script id="showcase-runtime">"#));
        assert!(html.contains(r#"data-on="toggle-menu close-menu-outside""#));
    }

    #[test]
    fn test_missing_config_renders_fallback() {
        let temp = TempDir::new().unwrap();
        let html = render_page(&project(temp.path()), &runtime().unwrap()).unwrap();
        assert!(html.contains("My App - Marketing"));
    }

    #[test]
    fn test_custom_skeleton() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("page.html"),
            r#"<html><body><h1 id="hero-title">x</h1></body></html>"#,
        )
        .unwrap();
        let mut project = project(temp.path());
        project.build.skeleton = Some("page.html".into());

        let html = render_page(&project, &runtime().unwrap()).unwrap();
        assert!(html.contains(r#"<h1 id="hero-title">My App</h1>"#));
    }

    #[test]
    fn test_missing_skeleton_is_error() {
        let temp = TempDir::new().unwrap();
        let mut project = project(temp.path());
        project.build.skeleton = Some("nope.html".into());
        assert!(load_skeleton(&project).is_err());
    }
}
