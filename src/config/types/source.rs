//! Location of the SiteConfig document: a local file or an `http(s)` URL.

use super::ConfigError;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Remote(Url),
}

impl ConfigSource {
    /// Interpret `location` as a URL when it has an `http`/`https` scheme,
    /// otherwise as a path relative to `base`.
    pub fn resolve(location: &str, base: &Path) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
            _ => Self::File(base.join(location)),
        }
    }

    /// Read the raw document text.
    pub async fn fetch(&self) -> Result<String, ConfigError> {
        match self {
            Self::File(path) => {
                fs::read_to_string(path).map_err(|err| ConfigError::Io(path.clone(), err))
            }
            Self::Remote(url) => {
                let fetch_err = |err| ConfigError::Fetch(url.to_string(), err);
                reqwest::get(url.clone())
                    .await
                    .and_then(|resp| resp.error_for_status())
                    .map_err(fetch_err)?
                    .text()
                    .await
                    .map_err(fetch_err)
            }
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_url() {
        let source = ConfigSource::resolve("https://example.com/config.json", Path::new("/site"));
        assert!(matches!(source, ConfigSource::Remote(_)));
    }

    #[test]
    fn test_resolve_relative_path() {
        let source = ConfigSource::resolve("config.json", Path::new("/site"));
        assert_eq!(source, ConfigSource::File(PathBuf::from("/site/config.json")));
    }

    #[test]
    fn test_resolve_non_http_scheme_is_path() {
        let source = ConfigSource::resolve("c:config.json", Path::new("/site"));
        assert!(matches!(source, ConfigSource::File(_)));
    }

    #[tokio::test]
    async fn test_fetch_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let text = ConfigSource::File(path).fetch().await.unwrap();
        assert_eq!(text, "{}");
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigSource::File(temp.path().join("nope.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
