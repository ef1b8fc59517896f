//! High-level interface for include-code operations.

mod context;
mod document;

pub use context::Context;
pub use document::{update_document, update_document_file, DocumentScanState, InclusionMarker};
