//! Example region extraction from annotated source files.
//!
//! A region is opened by `// example-start: N` (optionally followed by
//! `{annotation}`) and closed by `// example-end: N`. The extracted lines are
//! returned wrapped in a fenced code block.

use std::path::Path;

use crate::errors::{IncludeError, Result};
use crate::io::FileCache;
use crate::text_location::TextLocation;

use super::lines::{LineKind, Matchers};

/// Scanner state while looking for one example region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionScanState {
    /// Not inside the requested region.
    Outside,
    /// Collecting lines of the requested region.
    Inside,
}

impl RegionScanState {
    /// Next state after seeing a line of the given kind.
    pub fn transition(self, kind: &LineKind<'_>, example_id: &str) -> Self {
        match (self, kind) {
            (Self::Outside, LineKind::StartMarker { id, .. }) if *id == example_id => Self::Inside,
            (Self::Inside, LineKind::EndMarker { id }) if *id == example_id => Self::Outside,
            (state, _) => state,
        }
    }
}

/// Extracts example `example_id` from source text as a fenced code block.
///
/// Every returned line keeps its line terminator. The closing fence is always
/// appended, so an identifier that does not occur yields just the closing fence.
pub fn extract_example(
    input: &str,
    example_id: &str,
    matchers: &Matchers,
    source_path: Option<&Path>,
) -> Vec<String> {
    let fence = matchers.fence();
    let mut lines = Vec::new();
    let mut state = RegionScanState::Outside;
    let mut opened_at = None;

    for (index, line) in input.split_inclusive('\n').enumerate() {
        let kind = matchers.classify_source_line(line);
        let next = state.transition(&kind, example_id);

        match (state, next) {
            (RegionScanState::Inside, _) => {
                if !matchers.mentions_boundary(line) {
                    lines.push(line.to_string());
                }
                if next == RegionScanState::Outside {
                    tracing::debug!(
                        "Example {} closed at {}",
                        example_id,
                        TextLocation::at_index(source_path, index)
                    );
                }
            }
            (RegionScanState::Outside, RegionScanState::Inside) => {
                let annotation = match kind {
                    LineKind::StartMarker { annotation, .. } => annotation,
                    _ => None,
                };
                let location = TextLocation::at_index(source_path, index);
                tracing::debug!("Example {} opened at {}", example_id, location);
                lines.push(fence.opening_line(annotation));
                opened_at = Some(location);
            }
            (RegionScanState::Outside, RegionScanState::Outside) => {}
        }

        state = next;
    }

    match (state, opened_at) {
        (RegionScanState::Inside, Some(location)) => {
            tracing::warn!("Example {} opened at {} is never closed", example_id, location);
        }
        (_, None) => {
            let origin = source_path
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "input".to_string());
            tracing::warn!("Example {} not found in {}", example_id, origin);
        }
        _ => {}
    }

    lines.push(fence.closing_line());
    lines
}

/// Reads a source file and extracts example `example_id` from it.
pub fn extract_example_file(
    files: &dyn FileCache,
    path: &Path,
    example_id: &str,
    matchers: &Matchers,
) -> Result<Vec<String>> {
    let content = files.read(path).map_err(|e| IncludeError::io(path, e))?;
    Ok(extract_example(&content, example_id, matchers, Some(path)))
}
