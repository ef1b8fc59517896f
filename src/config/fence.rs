//! Code fence format of generated blocks.

use serde::{Deserialize, Serialize};

/// Shape of the fenced code block written into documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fence {
    /// The fence delimiter.
    #[serde(default = "default_token")]
    pub token: String,

    /// Language tag on the opening fence.
    #[serde(default = "default_language")]
    pub language: String,

    /// Fixed attributes following the language tag.
    #[serde(default = "default_attributes")]
    pub attributes: String,
}

fn default_token() -> String {
    "```".to_string()
}

fn default_language() -> String {
    "rust".to_string()
}

fn default_attributes() -> String {
    "+line_numbers".to_string()
}

impl Default for Fence {
    fn default() -> Self {
        Self {
            token: default_token(),
            language: default_language(),
            attributes: default_attributes(),
        }
    }
}

impl Fence {
    /// Formats the opening fence line, including its line terminator.
    pub fn opening_line(&self, annotation: Option<&str>) -> String {
        let mut line = format!("{}{}", self.token, self.language);
        for part in [Some(self.attributes.as_str()), annotation]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
        {
            line.push(' ');
            line.push_str(part);
        }
        line.push('\n');
        line
    }

    /// Formats the closing fence line, including its line terminator.
    pub fn closing_line(&self) -> String {
        format!("{}\n", self.token)
    }

    /// Returns true if the line is a closing fence, whatever its line terminator.
    pub fn is_closing(&self, line: &str) -> bool {
        line.trim_end() == self.token
    }
}
