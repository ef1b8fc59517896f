//! Readers for inclusion markers and annotated example sources.

mod example;
mod lines;

pub use example::{extract_example, extract_example_file, RegionScanState};
pub use lines::{LineKind, Matchers};
