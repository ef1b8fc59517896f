//! Marker keywords recognized in documents and source files.

use serde::{Deserialize, Serialize};

/// Keywords that make up inclusion markers and example region markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Line comment prefix in front of region markers.
    #[serde(default = "default_comment")]
    pub comment: String,

    /// Keyword opening an example region.
    #[serde(default = "default_start")]
    pub start: String,

    /// Keyword closing an example region.
    #[serde(default = "default_end")]
    pub end: String,

    /// Keyword of the inclusion marker inside the HTML comment.
    #[serde(default = "default_include")]
    pub include: String,

    /// Glyph separating the path from the example identifier.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_comment() -> String {
    "//".to_string()
}

fn default_start() -> String {
    "example-start".to_string()
}

fn default_end() -> String {
    "example-end".to_string()
}

fn default_include() -> String {
    "include-code".to_string()
}

fn default_separator() -> String {
    "§".to_string()
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            comment: default_comment(),
            start: default_start(),
            end: default_end(),
            include: default_include(),
            separator: default_separator(),
        }
    }
}

impl Markers {
    /// Regex source for inclusion markers. Captures `path` and `id`.
    pub fn include_pattern(&self) -> String {
        format!(
            r"^<!-- {}: (?P<path>.*){}(?P<id>\d+) -->",
            regex::escape(&self.include),
            regex::escape(&self.separator)
        )
    }

    /// Regex source for region start markers. Captures `id` and `annotation`.
    pub fn start_pattern(&self) -> String {
        format!(
            r"^\s*{} {}: (?P<id>\d+)(?: \{{(?P<annotation>.*)\}})?$",
            regex::escape(&self.comment),
            regex::escape(&self.start)
        )
    }

    /// Regex source for region end markers. Captures `id`.
    pub fn end_pattern(&self) -> String {
        format!(
            r"^\s*{} {}: (?P<id>\d+)$",
            regex::escape(&self.comment),
            regex::escape(&self.end)
        )
    }

    /// Substrings whose presence marks a line as a region boundary.
    pub fn boundary_keywords(&self) -> [String; 2] {
        [
            format!("{} {}", self.comment, self.start),
            format!("{} {}", self.comment, self.end),
        ]
    }
}
