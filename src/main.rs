//! Showcase - render an app landing or support page from a JSON config.

#![allow(dead_code)]

mod cli;
mod config;
mod dom;
mod embed;
mod logger;
mod page;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, init::InitMode};
use config::ProjectConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // `init` creates the project file, so it runs before one is looked up
    if let Commands::Init { name } = &cli.command {
        let cwd = std::env::current_dir()?;
        return match name {
            Some(name) => cli::init::new_project(&cwd.join(name), InitMode::NewDir),
            None => cli::init::new_project(&cwd, InitMode::CurrentDir),
        };
    }

    let project = ProjectConfig::load(&cli)?;
    match &cli.command {
        Commands::Build { .. } => cli::build::build_page(&project).map(|_| ()),
        Commands::Check { .. } => cli::check::check_config(&project).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve_page(&project),
        Commands::Init { .. } => Ok(()),
    }
}
