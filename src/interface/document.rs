//! Document updating: replaces the block after each inclusion marker with
//! freshly extracted example code.

use std::path::{Path, PathBuf};

use crate::errors::{IncludeError, Result};
use crate::readers::{extract_example_file, LineKind};
use crate::text_location::TextLocation;

use super::context::Context;

/// Scanner state while walking a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentScanState {
    /// Lines are copied to the output.
    Copying,
    /// Lines of the previous block are dropped up to its closing fence.
    Replacing,
}

impl DocumentScanState {
    /// Next state after seeing a line of the given kind.
    pub fn transition(self, kind: &LineKind<'_>) -> Self {
        match (self, kind) {
            (_, LineKind::Marker { .. }) => Self::Replacing,
            (Self::Replacing, LineKind::ClosingFence) => Self::Copying,
            (state, _) => state,
        }
    }
}

/// An inclusion marker found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionMarker {
    /// Path of the example source, relative to the document's directory.
    pub path: PathBuf,
    /// Example identifier.
    pub id: String,
    /// Where the marker was found.
    pub location: TextLocation,
}

impl InclusionMarker {
    /// Path of the example source, resolved against the document's directory.
    pub fn source_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.path)
    }
}

/// Updates document text, resolving marker paths against `base_dir`.
///
/// The marker line itself is always kept. Everything after it up to and
/// including the next closing fence of the input is replaced by the newly
/// extracted block.
pub fn update_document(
    input: &str,
    base_dir: &Path,
    ctx: &Context,
    document: Option<&Path>,
) -> Result<String> {
    let mut output = String::with_capacity(input.len());
    let mut state = DocumentScanState::Copying;
    let mut replacing_since = None;

    for (index, line) in input.split_inclusive('\n').enumerate() {
        let kind = ctx.matchers.classify_document_line(line);

        if state == DocumentScanState::Copying {
            output.push_str(line);
        }

        if let LineKind::Marker { path, id } = &kind {
            let marker = InclusionMarker {
                path: PathBuf::from(path),
                id: id.to_string(),
                location: TextLocation::at_index(document, index),
            };
            let source = marker.source_path(base_dir);
            tracing::debug!(
                "Including example {} from {} at {}",
                marker.id,
                source.display(),
                marker.location
            );

            let block =
                extract_example_file(ctx.file_cache.as_ref(), &source, &marker.id, &ctx.matchers)?;
            for block_line in &block {
                output.push_str(block_line);
            }
            replacing_since = Some(marker);
        }

        state = state.transition(&kind);
    }

    if let (DocumentScanState::Replacing, Some(marker)) = (state, replacing_since) {
        tracing::warn!(
            "No closing fence after marker at {}; the rest of the document was replaced",
            marker.location
        );
    }

    Ok(output)
}

/// Reads the document at `path` and returns its updated text.
///
/// Fails with [`IncludeError::NotAFile`] when `path` is not a regular file.
pub fn update_document_file(path: &Path, ctx: &Context) -> Result<String> {
    if !ctx.file_cache.is_file(path) {
        return Err(IncludeError::NotAFile(path.to_path_buf()));
    }

    let input = ctx.file_cache.read(path).map_err(|e| IncludeError::io(path, e))?;
    let canonical = ctx
        .file_cache
        .canonicalize(path)
        .map_err(|e| IncludeError::io(path, e))?;
    let base_dir = canonical.parent().unwrap_or_else(|| Path::new(""));

    update_document(&input, base_dir, ctx, Some(path))
}
