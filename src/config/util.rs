//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find the project file by searching upward from `start`.
///
/// Returns the absolute path to the file if found.
///
/// # Example
/// ```text
/// /home/user/site/assets/       ← start
/// /home/user/site/showcase.toml ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("showcase.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("showcase.toml")).unwrap();
        assert_eq!(found, temp.path().join("showcase.toml"));
    }

    #[test]
    fn test_absolute_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");
        assert_eq!(find_config_file(temp.path(), &path), None);
    }
}
