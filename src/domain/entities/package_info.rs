//! PackageInfo entity - a package after artifact preparation

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::PackageKind;

/// Result of preparing one package: where it lives locally and where it
/// came from (if anywhere).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub kind: PackageKind,
    pub local_path: PathBuf,
    pub remote_url: Option<String>,
}

impl PackageInfo {
    pub fn new(kind: PackageKind, local_path: impl Into<PathBuf>, remote_url: Option<String>) -> Self {
        Self {
            kind,
            local_path: local_path.into(),
            remote_url,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}
