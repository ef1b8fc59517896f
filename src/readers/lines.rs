//! Line classification shared by the document and source scanners.

use regex::Regex;

use crate::config::{Config, Fence};
use crate::errors::Result;

/// What a single line means to the scanners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// An inclusion marker in a document.
    Marker { path: &'a str, id: &'a str },
    /// A closing code fence in a document.
    ClosingFence,
    /// An example region start marker in source.
    StartMarker {
        id: &'a str,
        annotation: Option<&'a str>,
    },
    /// An example region end marker in source.
    EndMarker { id: &'a str },
    /// Anything else.
    Ordinary,
}

/// Precompiled matchers built from a [`Config`].
///
/// Immutable once built; both scanners borrow the same instance.
#[derive(Debug, Clone)]
pub struct Matchers {
    include: Regex,
    start: Regex,
    end: Regex,
    boundary: [String; 2],
    fence: Fence,
}

impl Matchers {
    /// Compiles the matchers for the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let markers = &config.markers;

        Ok(Self {
            include: Regex::new(&markers.include_pattern())?,
            start: Regex::new(&markers.start_pattern())?,
            end: Regex::new(&markers.end_pattern())?,
            boundary: markers.boundary_keywords(),
            fence: config.fence.clone(),
        })
    }

    /// The fence format used for generated blocks.
    pub fn fence(&self) -> &Fence {
        &self.fence
    }

    /// Classifies a document line as a marker, a closing fence or ordinary text.
    pub fn classify_document_line<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(caps) = self.include.captures(line) {
            if let (Some(path), Some(id)) = (caps.name("path"), caps.name("id")) {
                return LineKind::Marker {
                    path: path.as_str(),
                    id: id.as_str(),
                };
            }
        }

        if self.fence.is_closing(line) {
            LineKind::ClosingFence
        } else {
            LineKind::Ordinary
        }
    }

    /// Classifies a source line as a region start, region end or ordinary code.
    pub fn classify_source_line<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = strip_terminator(line);

        if let Some(caps) = self.start.captures(line) {
            if let Some(id) = caps.name("id") {
                return LineKind::StartMarker {
                    id: id.as_str(),
                    annotation: caps.name("annotation").map(|m| m.as_str()),
                };
            }
        }

        match self.end.captures(line).and_then(|caps| caps.name("id")) {
            Some(id) => LineKind::EndMarker { id: id.as_str() },
            None => LineKind::Ordinary,
        }
    }

    /// Returns true if the line mentions any region boundary keyword.
    pub fn mentions_boundary(&self, line: &str) -> bool {
        self.boundary.iter().any(|keyword| line.contains(keyword.as_str()))
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
