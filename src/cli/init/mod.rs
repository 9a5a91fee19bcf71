//! Project initialization.
//!
//! Writes a starter project that `showcase build` renders as is.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation

mod validate;

use crate::{
    embed::{
        SKELETON_HTML,
        init::{PROJECT_TOML, STARTER_CONFIG, StarterVars},
    },
    log,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

pub use validate::InitMode;

/// Files written by `init`, relative to the project root.
pub const STARTER_FILES: &[&str] = &["showcase.toml", "config.json", "index.html"];

/// Ignore patterns for the output directory.
const GITIGNORE: &str = "/public/\n";

/// Create a starter project at `root`.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create it if needed
/// 3. Write showcase.toml, config.json, index.html and .gitignore
pub fn new_project(root: &Path, mode: InitMode) -> Result<()> {
    validate::validate_target(root, mode)?;

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    let name = app_name(root);
    let config = STARTER_CONFIG.render(&StarterVars { name: name.clone() });
    let contents = [PROJECT_TOML, config.as_str(), SKELETON_HTML];
    for (file, content) in STARTER_FILES.iter().zip(contents) {
        write_file(&root.join(file), content)?;
    }

    let gitignore = root.join(".gitignore");
    if !gitignore.exists() {
        write_file(&gitignore, GITIGNORE)?;
    }

    log!("init"; "created `{}` in {}", name, root.display());
    Ok(())
}

/// App name for the starter config: the directory name, title-cased.
fn app_name(root: &Path) -> String {
    let words: Vec<String> = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect();
    if words.is_empty() {
        "My App".into()
    } else {
        words.join(" ")
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_new_project_writes_starter() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("pocket-notes");
        new_project(&root, InitMode::NewDir).unwrap();

        for file in STARTER_FILES {
            assert!(root.join(file).is_file(), "{file} missing");
        }
        let json = fs::read_to_string(root.join("config.json")).unwrap();
        let config = SiteConfig::from_json(&json).unwrap();
        assert_eq!(config.app.as_ref().unwrap().name, "Pocket Notes");
        assert!(config.lint().is_empty());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.html"), "mine").unwrap();

        assert!(new_project(temp.path(), InitMode::CurrentDir).is_err());
        let kept = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert_eq!(kept, "mine");
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn test_keeps_existing_gitignore() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "target/\n").unwrap();
        new_project(temp.path(), InitMode::CurrentDir).unwrap();
        let ignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert_eq!(ignore, "target/\n");
    }

    #[test]
    fn test_app_name() {
        assert_eq!(app_name(Path::new("/tmp/my_cool-app")), "My Cool App");
        assert_eq!(app_name(Path::new("/")), "My App");
        assert_eq!(app_name(Path::new("/tmp/--")), "My App");
    }
}
