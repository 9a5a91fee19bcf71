//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro gated on `--verbose`
//! - `Status` for one-shot success/failure lines at the end of a command
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "rendered {} sections", count);
//! debug!("config"; "loaded from {}", source);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// Error and warning prefixes go to stderr, everything else to stdout.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    if is_error_module(&module_lower) {
        let mut out = stderr().lock();
        writeln!(out, "{prefix} {message}").ok();
        out.flush().ok();
    } else {
        let mut out = stdout().lock();
        writeln!(out, "{prefix} {message}").ok();
        out.flush().ok();
    }
}

fn is_error_module(module_lower: &str) -> bool {
    matches!(module_lower, "error" | "warning")
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "serve" => prefix.bright_blue().bold().to_string(),
        "build" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_magenta().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Status (final one-line summary)
// ============================================================================

/// Final status line for a command.
pub struct Status;

impl Status {
    /// Display success message (✓ prefix, green).
    pub fn success(message: &str) {
        let mut out = stdout().lock();
        writeln!(out, "{} {message}", "✓".green()).ok();
        out.flush().ok();
    }

    /// Display error message (✗ prefix, red) with optional detail.
    pub fn error(summary: &str, detail: &str) {
        let mut out = stderr().lock();
        if detail.is_empty() {
            writeln!(out, "{} {summary}", "✗".red()).ok();
        } else {
            writeln!(out, "{} {summary}\n{detail}", "✗".red()).ok();
        }
        out.flush().ok();
    }

    /// Display warning message (⚠ prefix, yellow).
    pub fn warning(detail: &str) {
        let mut out = stderr().lock();
        writeln!(out, "{} {detail}", "⚠".yellow()).ok();
        out.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================
