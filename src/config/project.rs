//! `showcase.toml` project settings.
//!
//! # Example
//!
//! ```toml
//! [build]
//! config = "config.json"      # path or http(s) URL of the page config
//! skeleton = "index.html"     # page skeleton (embedded default when absent)
//! output = "public"           # output directory
//!
//! [serve]
//! interface = "127.0.0.1"
//! port = 5277
//! ```
//!
//! The file is optional: without one, defaults apply with the current
//! directory as project root. CLI flags override file values.

use super::{ConfigSource, ProjectError, util::find_config_file};
use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use serde::Deserialize;
use std::{
    fs,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};

/// Root of `showcase.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project root: parent of the project file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub build: BuildSection,
    pub serve: ServeSection,
}

/// `[build]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Page config location: path relative to root, or an http(s) URL.
    pub config: String,
    /// Page skeleton; the embedded skeleton is used when `None`.
    pub skeleton: Option<PathBuf>,
    /// Output directory relative to root.
    pub output: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            config: "config.json".into(),
            skeleton: None,
            output: "public".into(),
        }
    }
}

/// `[serve]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServeSection {
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,
    pub port: u16,
}

impl Default for ServeSection {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 5277,
        }
    }
}

impl ProjectConfig {
    /// Load from CLI arguments.
    ///
    /// Searches upward from cwd for the project file. A missing file is not
    /// an error.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut config = match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config
            }
            None => Self {
                root: cwd,
                ..Self::default()
            },
        };
        config.apply_command_options(cli);
        Ok(config)
    }

    /// Parse a project file, warning about unknown keys.
    fn from_path(path: &Path) -> Result<Self, ProjectError> {
        let content =
            fs::read_to_string(path).map_err(|err| ProjectError::Io(path.to_path_buf(), err))?;
        let (config, ignored) = Self::parse_with_ignored(&content)?;
        for field in ignored {
            log!("warning"; "unknown field `{}` in {} (ignored)", field, path.display());
        }
        Ok(config)
    }

    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ProjectError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply CLI overrides on top of file values.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } | Commands::Check { build_args } => {
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                if let Some(interface) = interface {
                    self.serve.interface = *interface;
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
            }
            Commands::Init { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        if let Some(source) = &args.site_config {
            self.build.config = source.clone();
        }
        if let Some(skeleton) = &args.skeleton {
            self.build.skeleton = Some(skeleton.clone());
        }
        if let Some(output) = &args.output {
            self.build.output = output.clone();
        }
    }

    /// Where the page config is loaded from.
    pub fn config_source(&self) -> ConfigSource {
        ConfigSource::resolve(&self.build.config, &self.root)
    }

    /// Absolute skeleton path, if one is configured.
    pub fn skeleton_path(&self) -> Option<PathBuf> {
        self.build.skeleton.as_ref().map(|p| self.root.join(p))
    }

    /// Absolute output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.build.output)
    }
}
