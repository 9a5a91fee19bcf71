//! Configuration utility types.
//!
//! | Module       | Purpose                                  |
//! |--------------|------------------------------------------|
//! | `error`      | Load errors (config document, project)   |
//! | `diagnostic` | Warnings reported by `check`             |
//! | `source`     | Where the config document comes from     |

mod diagnostic;
mod error;
mod source;

pub use diagnostic::Diagnostics;
pub use error::{ConfigError, ProjectError};
pub use source::ConfigSource;
