//! The two version-bearing artifacts: the JSON manifest and the source file

pub mod manifest;
pub mod source;

pub use manifest::ManifestDocument;
pub use source::{rewrite_source, Lookup, SourceDocument};

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Write rewritten artifact contents back to disk
pub fn persist(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}
