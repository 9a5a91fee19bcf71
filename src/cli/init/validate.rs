//! Pre-initialization validation.
//!
//! Validates target directory state before writing starter files.

use super::STARTER_FILES;
use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `showcase init` - write into the current directory
    CurrentDir,
    /// `showcase init <name>` - create a new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: none of the starter files may exist yet
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let existing: Vec<_> = STARTER_FILES
                .iter()
                .filter(|file| root.join(file).exists())
                .copied()
                .collect();
            if !existing.is_empty() {
                bail!(
                    "{} already exist(s) in the current directory.\n\
                     Use `showcase init <name>` to create in a new subdirectory.",
                    existing.join(", ")
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}
