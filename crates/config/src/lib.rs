//! INI configuration loader for VaporCore.
//!
//! ```text
//! ; comment
//! [Steam]
//! app_id = 480
//! username = "Test User"
//! ```
//!
//! [`ConfigStore`] parses the file into a case-insensitive section/key table
//! and derives the well-known [`SteamSettings`] from the `[Steam]` section.

pub mod parser;
pub mod settings;
pub mod store;
pub mod value;

use std::path::PathBuf;

// Re-export primary types.
pub use parser::LineError;
pub use settings::{DEFAULT_CONFIG_FILENAME, SteamSettings};
pub use store::{ConfigStore, LineDiagnostic};
pub use value::FromConfigValue;

/// Errors raised inside the configuration loader.
///
/// None of these escape the plain getters; they are logged, recorded as
/// diagnostics, or returned from [`ConfigStore::try_get`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: LineError,
    },

    #[error("invalid {kind} value for [{section}] {key}: {value}")]
    InvalidValue {
        kind: &'static str,
        section: String,
        key: String,
        value: String,
    },
}

impl From<&LineDiagnostic> for ConfigError {
    fn from(diag: &LineDiagnostic) -> Self {
        ConfigError::Line {
            line: diag.line,
            source: diag.error.clone(),
        }
    }
}
