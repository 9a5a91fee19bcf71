//! `showcase check`: strict config load with diagnostics.
//!
//! Unlike `build`, a config that cannot be loaded is an error here, not a
//! silent fallback.

use super::common::runtime;
use crate::{
    config::{Diagnostics, ProjectConfig, SiteConfig, error_chain},
    log,
    logger::Status,
};
use anyhow::{Result, bail};

/// Load and lint the page config. Fails when the config cannot be loaded.
pub fn check_config(project: &ProjectConfig) -> Result<Diagnostics> {
    let source = project.config_source();
    let content = match runtime()?.block_on(source.fetch()) {
        Ok(content) => content,
        Err(err) => {
            Status::error(&format!("cannot load {source}"), &error_chain(&err));
            bail!("config check failed");
        }
    };

    let (config, ignored) = match SiteConfig::parse_with_ignored(&content) {
        Ok(parsed) => parsed,
        Err(err) => {
            Status::error(&format!("invalid config {source}"), &error_chain(&err));
            bail!("config check failed");
        }
    };

    let mut diag = config.lint();
    diag.unknown_fields(ignored);

    if diag.is_empty() {
        Status::success(&format!("{source} is valid"));
    } else {
        log!("check"; "{}", source);
        eprint!("{diag}");
        Status::warning(&format!("{} warning(s)", diag.len()));
    }
    Ok(diag)
}
