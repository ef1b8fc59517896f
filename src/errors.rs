//! Error types for include-code.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for include-code operations.
#[derive(Error, Debug)]
pub enum IncludeError {
    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl IncludeError {
    /// Wraps an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IncludeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for include-code operations.
pub type Result<T> = std::result::Result<T, IncludeError>;
