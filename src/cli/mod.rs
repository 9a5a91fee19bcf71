//! Command-line interface module.
//!
//! | Command | Entry point              |
//! |---------|--------------------------|
//! | `init`  | [`init::new_project`]    |
//! | `build` | [`build::build_page`]    |
//! | `check` | [`check::check_config`]  |
//! | `serve` | [`serve::serve_page`]    |

mod args;
pub mod build;
pub mod check;
pub mod common;
pub mod init;
pub mod serve;

pub use args::{BuildArgs, Cli, Commands};
