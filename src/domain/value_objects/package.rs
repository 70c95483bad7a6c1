//! Package value objects
//!
//! The stack is made of exactly three installable packages. `PackageKind`
//! names them and carries everything derived from the name (binary, service
//! unit, host group, install paths); `PackageMap` holds one value per kind so
//! lookups can never miss.

use serde::Serialize;

/// One of the three installable packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageKind {
    /// Metrics collector
    Prometheus,
    /// Host agent
    NodeExporter,
    /// Dashboard server
    Grafana,
}

impl PackageKind {
    pub const ALL: [PackageKind; 3] = [
        PackageKind::Prometheus,
        PackageKind::NodeExporter,
        PackageKind::Grafana,
    ];

    /// Key used in `packages`, `remote_packages` and the secrets document
    pub fn name(&self) -> &'static str {
        match self {
            PackageKind::Prometheus => "prometheus",
            PackageKind::NodeExporter => "node_exporter",
            PackageKind::Grafana => "grafana",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Human-readable label used in task names
    pub fn label(&self) -> &'static str {
        match self {
            PackageKind::Prometheus => "Prometheus",
            PackageKind::NodeExporter => "Node Exporter",
            PackageKind::Grafana => "Grafana",
        }
    }

    /// Executable probed with `which` to detect an existing install
    pub fn binary(&self) -> &'static str {
        match self {
            PackageKind::Prometheus => "prometheus",
            PackageKind::NodeExporter => "node_exporter",
            PackageKind::Grafana => "grafana-server",
        }
    }

    /// systemd unit name (without `.service`)
    pub fn service_name(&self) -> &'static str {
        self.name()
    }

    /// Directory name the release archive extracts to under `/usr/local`
    pub fn default_extracted_dir(&self) -> &'static str {
        match self {
            PackageKind::Prometheus => "prometheus-3.0.1.linux-amd64",
            PackageKind::NodeExporter => "node_exporter-1.8.2.linux-amd64",
            PackageKind::Grafana => "grafana-v11.3.1",
        }
    }

    /// Stable path the versioned directory is symlinked to
    pub fn install_dir(&self) -> String {
        format!("/usr/local/{}", self.name())
    }

    /// Where the archive is copied on the target before extraction
    pub fn staging_archive(&self) -> String {
        format!("/tmp/{}.tar.gz", self.name())
    }

    /// Archive file name on the staging host
    pub fn archive_name(&self) -> String {
        format!("{}.tar.gz", self.name())
    }

    /// Playbook variable holding the controller-side archive path
    pub fn package_var(&self) -> String {
        format!("{}_package", self.name())
    }

    /// Register name for the install probe result
    pub fn probe_register(&self) -> String {
        format!("{}_installed", self.name())
    }

    /// File name of the generated task-list document
    pub fn playbook_file(&self) -> String {
        format!("{}_deploy.yml", self.name())
    }

    /// File name of the generated systemd unit
    pub fn unit_file(&self) -> String {
        format!("{}.service", self.service_name())
    }
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Exactly one value per package kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMap<T> {
    pub prometheus: T,
    pub node_exporter: T,
    pub grafana: T,
}

impl<T> PackageMap<T> {
    /// Build a map by evaluating `f` for every kind, stopping at the first error
    pub fn try_from_fn<E>(mut f: impl FnMut(PackageKind) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            prometheus: f(PackageKind::Prometheus)?,
            node_exporter: f(PackageKind::NodeExporter)?,
            grafana: f(PackageKind::Grafana)?,
        })
    }

    pub fn from_fn(mut f: impl FnMut(PackageKind) -> T) -> Self {
        Self {
            prometheus: f(PackageKind::Prometheus),
            node_exporter: f(PackageKind::NodeExporter),
            grafana: f(PackageKind::Grafana),
        }
    }

    pub fn get(&self, kind: PackageKind) -> &T {
        match kind {
            PackageKind::Prometheus => &self.prometheus,
            PackageKind::NodeExporter => &self.node_exporter,
            PackageKind::Grafana => &self.grafana,
        }
    }

    pub fn get_mut(&mut self, kind: PackageKind) -> &mut T {
        match kind {
            PackageKind::Prometheus => &mut self.prometheus,
            PackageKind::NodeExporter => &mut self.node_exporter,
            PackageKind::Grafana => &mut self.grafana,
        }
    }

    /// Iterate in canonical order (prometheus, node_exporter, grafana)
    pub fn iter(&self) -> impl Iterator<Item = (PackageKind, &T)> {
        PackageKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_names_round_trip() {
        for kind in PackageKind::ALL {
            assert_eq!(PackageKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(PackageKind::from_name("alertmanager"), None);
    }

    #[test]
    fn grafana_binary_differs_from_name() {
        assert_eq!(PackageKind::Grafana.binary(), "grafana-server");
        assert_eq!(PackageKind::Grafana.service_name(), "grafana");
    }

    #[test]
    fn derived_paths_follow_package_name() {
        let kind = PackageKind::NodeExporter;
        assert_eq!(kind.install_dir(), "/usr/local/node_exporter");
        assert_eq!(kind.staging_archive(), "/tmp/node_exporter.tar.gz");
        assert_eq!(kind.package_var(), "node_exporter_package");
        assert_eq!(kind.probe_register(), "node_exporter_installed");
        assert_eq!(kind.playbook_file(), "node_exporter_deploy.yml");
    }

    #[test]
    fn package_map_iterates_in_canonical_order() {
        let map = PackageMap::from_fn(|kind| kind.name().len());
        let kinds: Vec<_> = map.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, PackageKind::ALL.to_vec());
        assert_eq!(*map.get(PackageKind::NodeExporter), "node_exporter".len());
    }

    #[test]
    fn package_map_try_from_fn_stops_at_first_error() {
        let mut seen = Vec::new();
        let result: Result<PackageMap<()>, PackageKind> = PackageMap::try_from_fn(|kind| {
            seen.push(kind);
            if kind == PackageKind::NodeExporter {
                Err(kind)
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(PackageKind::NodeExporter));
        assert_eq!(seen, vec![PackageKind::Prometheus, PackageKind::NodeExporter]);
    }
}
