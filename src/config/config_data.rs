//! Configuration data structures.

use serde::{Deserialize, Serialize};

use super::fence::Fence;
use super::markers::Markers;
use crate::errors::{IncludeError, Result};

/// Main configuration structure for include-code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Marker keywords for documents and source files.
    #[serde(default)]
    pub markers: Markers,

    /// Format of generated code fences.
    #[serde(default)]
    pub fence: Fence,
}

impl Config {
    /// Checks that no keyword the scanners depend on is empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("markers.comment", &self.markers.comment),
            ("markers.start", &self.markers.start),
            ("markers.end", &self.markers.end),
            ("markers.include", &self.markers.include),
            ("markers.separator", &self.markers.separator),
            ("fence.token", &self.fence.token),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((key, _)) => Err(IncludeError::Config(format!("{} must not be empty", key))),
            None => Ok(()),
        }
    }
}
