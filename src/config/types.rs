//! Validated configuration types
//!
//! `Configuration` is what every stage after loading works with. Required
//! fields are not optional here; anything that could be missing has already
//! been rejected by validation.

use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;

use crate::domain::entities::{PackageInfo, ServerDescriptor};
use crate::domain::value_objects::{PackageKind, PackageMap, ProxySettings, TopologyMode};

/// Controller-side directory prefixed to relative package paths in task lists
pub const DEFAULT_PACKAGE_SOURCE_ROOT: &str = "/app";

/// Host groups, normalized to lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetServers {
    pub master: Vec<ServerDescriptor>,
    /// Always empty in single topology
    pub slave: Vec<ServerDescriptor>,
    pub node_exporter: Vec<ServerDescriptor>,
    pub grafana: Vec<ServerDescriptor>,
}

/// Staging host and directory for package transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransfer {
    pub source_server: ServerDescriptor,
    pub remote_path: String,
}

/// Fully validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub deployment_base_dir: PathBuf,
    pub packages: PackageMap<PathBuf>,
    /// `None` when the key is present but has no URL
    pub remote_packages: PackageMap<Option<String>>,
    pub target_servers: TargetServers,
    /// Passed through verbatim to `prometheus.yml`
    pub prometheus_config: Value,
    /// Passed through verbatim to `grafana.ini`
    pub grafana_config: Value,
    pub topology: TopologyMode,
    pub file_transfer: FileTransfer,
    pub http_proxy: ProxySettings,
    /// Overwrite flag from the config file; the CLI flag wins when given
    pub overwrite: Option<bool>,
    pub package_source_root: String,
    pub extracted_dirs: PackageMap<String>,
}

impl Configuration {
    /// Directory holding every generated artifact
    pub fn configs_dir(&self) -> PathBuf {
        self.deployment_base_dir.join("configs")
    }

    pub fn packages_dir(&self) -> PathBuf {
        self.deployment_base_dir.join("packages")
    }

    /// Rebuild with package paths taken from preparation results
    pub fn with_package_paths(mut self, packages: &[PackageInfo]) -> Self {
        for info in packages {
            *self.packages.get_mut(info.kind) = info.local_path.clone();
        }
        self
    }

    /// Path of a package archive as seen by the automation engine's controller
    pub fn controller_package_path(&self, kind: PackageKind) -> String {
        let path = self.packages.get(kind);
        if path.is_absolute() {
            return path.display().to_string();
        }
        format!(
            "{}/{}",
            self.package_source_root.trim_end_matches('/'),
            strip_dot_prefix(path).display()
        )
    }
}

fn strip_dot_prefix(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}
