//! Shared fixtures for unit tests

use std::path::PathBuf;

use serde_yaml_ng::Value;

use crate::config::{Configuration, FileTransfer, TargetServers, DEFAULT_PACKAGE_SOURCE_ROOT};
use crate::domain::entities::ServerDescriptor;
use crate::domain::value_objects::{PackageMap, ProxySettings, TopologyMode};

pub(crate) fn sample_configuration(topology: TopologyMode) -> Configuration {
    let slave = if topology.is_cluster() {
        vec![ServerDescriptor::new("10.0.0.2", "root", "s-pass")]
    } else {
        Vec::new()
    };

    Configuration {
        deployment_base_dir: PathBuf::from("/opt/monitoring"),
        packages: PackageMap::from_fn(|kind| {
            PathBuf::from(format!("./installation_packages/{}", kind.archive_name()))
        }),
        remote_packages: PackageMap::from_fn(|kind| {
            Some(format!("https://example.com/{}", kind.archive_name()))
        }),
        target_servers: TargetServers {
            master: vec![ServerDescriptor::new("10.0.0.1", "root", "m-pass")],
            slave,
            node_exporter: vec![
                ServerDescriptor::new("10.0.0.3", "root", "n3-pass"),
                ServerDescriptor::new("10.0.0.4", "ops", "n4-pass"),
            ],
            grafana: vec![ServerDescriptor::new("10.0.0.5", "root", "g-pass")],
        },
        prometheus_config: serde_yaml_ng::from_str::<Value>(
            "global:\n  scrape_interval: 15s\nscrape_configs:\n  - job_name: node\n    static_configs:\n      - targets: ['10.0.0.3:9100']\n",
        )
        .unwrap(),
        grafana_config: serde_yaml_ng::from_str::<Value>("server:\n  http_port: 3000\n").unwrap(),
        topology,
        file_transfer: FileTransfer {
            source_server: ServerDescriptor::new("10.0.0.9", "deploy", "src-pass"),
            remote_path: "/data/packages".to_string(),
        },
        http_proxy: ProxySettings::default(),
        overwrite: None,
        package_source_root: DEFAULT_PACKAGE_SOURCE_ROOT.to_string(),
        extracted_dirs: PackageMap::from_fn(|kind| kind.default_extracted_dir().to_string()),
    }
}
