//! Execution context for include-code operations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::errors::Result;
use crate::io::{FileCache, RealFileCache};
use crate::readers::Matchers;

/// Context for include-code operations.
///
/// Contains the matchers compiled from configuration, and file system access.
#[derive(Debug)]
pub struct Context {
    /// Matchers compiled from the configuration.
    pub matchers: Matchers,
    /// File cache for reading documents and sources.
    pub file_cache: Arc<dyn FileCache>,
}

impl Context {
    /// Creates a new context reading files relative to `base_dir`.
    pub fn new(config: Config, base_dir: PathBuf) -> Result<Self> {
        Self::with_file_cache(config, Arc::new(RealFileCache::new(base_dir)))
    }

    /// Creates a context over an arbitrary file cache.
    pub fn with_file_cache(config: Config, file_cache: Arc<dyn FileCache>) -> Result<Self> {
        let matchers = Matchers::new(&config)?;
        Ok(Self {
            matchers,
            file_cache,
        })
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Result<Self> {
        Self::new(Config::default(), base_dir)
    }

    /// Creates a context for processing `document`.
    ///
    /// Uses the configuration at `config_path` when given, otherwise searches
    /// upwards from the document's directory.
    pub fn for_document(document: &Path, config_path: Option<&Path>) -> Result<Self> {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let config = match config_path {
            Some(path) => crate::config::read_config_file(path)?,
            None => {
                let start = base_dir.join(document);
                let start = start.parent().unwrap_or(&base_dir);
                crate::config::read_config(start)?
            }
        };

        Self::new(config, base_dir)
    }
}
