//! Text location tracking for diagnostics.

use std::fmt;
use std::path::{Path, PathBuf};

/// Represents a line within a text file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextLocation {
    /// The file path (if known).
    pub filename: Option<PathBuf>,
    /// Line number (1-indexed).
    pub line: usize,
}

impl TextLocation {
    /// Builds a location from an optional path and a 0-based line index.
    pub(crate) fn at_index(filename: Option<&Path>, index: usize) -> Self {
        Self {
            filename: filename.map(|p| p.to_path_buf()),
            line: index + 1,
        }
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filename {
            Some(path) => write!(f, "{}:{}", path.display(), self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_filename() {
        let loc = TextLocation::at_index(Some(Path::new("README.md")), 9);
        assert_eq!(format!("{}", loc), "README.md:10");
    }

    #[test]
    fn test_display_without_filename() {
        let loc = TextLocation::at_index(None, 41);
        assert_eq!(format!("{}", loc), "line 42");
        assert!(loc.filename.is_none());
    }

    #[test]
    fn test_at_index_is_one_based() {
        let loc = TextLocation::at_index(None, 0);
        assert_eq!(loc.line, 1);
    }
}
