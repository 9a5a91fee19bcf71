//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Render an app landing/support page from a JSON config
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project file path (default: showcase.toml)
    #[arg(short = 'C', long, default_value = "showcase.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a starter project (showcase.toml, config.json, index.html)
    #[command(visible_alias = "i")]
    Init {
        /// Project directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Render the page into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Load the page config strictly and report problems
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Start a preview server that re-renders on every page load
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Shared arguments for Build, Check and Serve
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Page config location: path or http(s) URL (default: config.json)
    #[arg(short = 's', long = "site-config", value_hint = clap::ValueHint::AnyPath)]
    pub site_config: Option<String>,

    /// Page skeleton HTML (default: embedded skeleton)
    #[arg(short = 'k', long, value_hint = clap::ValueHint::FilePath)]
    pub skeleton: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}
