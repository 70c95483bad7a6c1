//! GeneratedFile entity - a rendered deployment artifact
//!
//! GeneratedFiles are produced by the generation services and written under
//! `<deployment_base_dir>/configs`. They are regenerated on every run.

use std::path::{Path, PathBuf};

/// A rendered artifact ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the configs directory
    path: PathBuf,
    content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
