//! File access for documents and example sources.

mod file_cache;

pub use file_cache::{FileCache, RealFileCache, VirtualFS};
