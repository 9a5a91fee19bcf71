//! `showcase build`: render the page into the output directory.

use super::common::{render_page, runtime};
use crate::{config::ProjectConfig, log, logger::Status};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf, time::Instant};

/// Render `{output}/index.html`. Returns the written path.
pub fn build_page(project: &ProjectConfig) -> Result<PathBuf> {
    let start = Instant::now();
    let runtime = runtime()?;

    log!("build"; "config: {}", project.config_source());
    let html = render_page(project, &runtime)?;

    let output_dir = project.output_dir();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create '{}'", output_dir.display()))?;
    let index = output_dir.join("index.html");
    fs::write(&index, html).with_context(|| format!("Failed to write '{}'", index.display()))?;

    Status::success(&format!(
        "built {} in {:.0?}",
        index.display(),
        start.elapsed()
    ));
    Ok(index)
}
