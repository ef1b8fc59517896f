//! include-code - keep documentation code examples in sync with source files
//!
//! Documents reference numbered example regions of source files with
//! inclusion markers:
//!
//! ```text
//! <!-- include-code: ../examples/004-dog/main.rs§1 -->
//! ```
//!
//! Source files delimit those regions with comment markers:
//!
//! ```text
//! // example-start: 1 {0|3,4}
//! fn main() {}
//! // example-end: 1
//! ```
//!
//! Updating a document replaces the fenced block following each marker with
//! the current contents of the referenced region.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use include_code::interface::{update_document_file, Context};
//!
//! let path = Path::new("docs/dog.md");
//! let ctx = Context::for_document(path, None).unwrap();
//! let updated = update_document_file(path, &ctx).unwrap();
//! print!("{}", updated);
//! ```

pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod readers;
pub mod text_location;

// Re-export commonly used types
pub use config::Config;
pub use errors::{IncludeError, Result};
pub use interface::{update_document, update_document_file, Context};
pub use readers::{extract_example, Matchers};
