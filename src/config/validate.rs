//! Configuration validation
//!
//! Turns a merged `ConfigDocument` into a `Configuration`. Checks run in a
//! fixed order and stop at the first failure, so the error always names the
//! first problem a reader of the file would hit.

use serde_yaml_ng::Value;

use crate::domain::entities::ServerDescriptor;
use crate::domain::value_objects::{PackageKind, PackageMap, ProxySettings, TopologyMode};
use crate::error::{PromstackError, PromstackResult};

use super::document::{ConfigDocument, ServerEntry};
use super::types::{Configuration, FileTransfer, TargetServers, DEFAULT_PACKAGE_SOURCE_ROOT};

/// Top-level keys that must be present, in the order they are checked
pub const REQUIRED_KEYS: [&str; 9] = [
    "deployment_base_dir",
    "packages",
    "remote_packages",
    "target_servers",
    "prometheus_config",
    "grafana_config",
    "prometheus_deployment",
    "file_transfer",
    "http_proxy",
];

/// Validate a merged document
pub fn validate(doc: &ConfigDocument) -> PromstackResult<Configuration> {
    let (
        Some(deployment_base_dir),
        Some(packages),
        Some(remote_packages),
        Some(target_servers),
        Some(prometheus_config),
        Some(grafana_config),
        Some(deployment_mode),
        Some(file_transfer),
        Some(http_proxy),
    ) = (
        doc.deployment_base_dir.as_ref(),
        doc.packages.as_ref(),
        doc.remote_packages.as_ref(),
        doc.target_servers.as_ref(),
        doc.prometheus_config.as_ref(),
        doc.grafana_config.as_ref(),
        doc.prometheus_deployment.as_ref(),
        doc.file_transfer.as_ref(),
        doc.http_proxy.as_ref(),
    )
    else {
        return Err(missing_key(doc));
    };

    let topology = topology_mode(deployment_mode.cluster_mode.as_ref())?;

    let prometheus_servers = &target_servers.prometheus_servers;
    if prometheus_servers.master.is_empty() {
        return Err(PromstackError::validation(
            "missing target_servers.prometheus_servers.master",
        ));
    }
    if topology.is_cluster() && prometheus_servers.slave.is_empty() {
        return Err(PromstackError::validation(
            "cluster mode requires target_servers.prometheus_servers.slave",
        ));
    }
    if target_servers.node_exporter_servers.is_empty() {
        return Err(PromstackError::validation(
            "missing target_servers.node_exporter_servers",
        ));
    }
    if target_servers.grafana_servers.is_empty() {
        return Err(PromstackError::validation(
            "missing target_servers.grafana_servers",
        ));
    }

    let master = descriptors(
        prometheus_servers.master.as_slice(),
        "prometheus_servers.master",
    )?;
    let slave = if topology.is_cluster() {
        descriptors(
            prometheus_servers.slave.as_slice(),
            "prometheus_servers.slave",
        )?
    } else {
        Vec::new()
    };
    let node_exporter = descriptors(
        target_servers.node_exporter_servers.as_slice(),
        "node_exporter_servers",
    )?;
    let grafana = descriptors(target_servers.grafana_servers.as_slice(), "grafana_servers")?;

    let source_server = file_transfer
        .source_server
        .as_ref()
        .ok_or_else(|| PromstackError::validation("missing file_transfer.source_server"))?;
    let remote_path = file_transfer
        .remote_path
        .clone()
        .ok_or_else(|| PromstackError::validation("missing file_transfer.remote_path"))?;
    let source_server = descriptor(source_server, "file_transfer.source_server")?;

    let artifacts = PackageMap::try_from_fn(|kind| {
        let local = packages.get(kind.name()).cloned().flatten().ok_or_else(|| {
            PromstackError::validation(format!("packages is missing an entry for '{}'", kind))
        })?;
        let remote = remote_packages.get(kind.name()).ok_or_else(|| {
            PromstackError::validation(format!(
                "remote_packages is missing an entry for '{}'",
                kind
            ))
        })?;
        let remote = remote.clone().filter(|url| !url.trim().is_empty());
        Ok::<_, PromstackError>((local, remote))
    })?;

    let overwrite = doc
        .overwrite
        .as_ref()
        .map(overwrite_flag)
        .transpose()?;

    for name in doc.extracted_dirs.keys() {
        if PackageKind::from_name(name).is_none() {
            return Err(PromstackError::validation(format!(
                "extracted_dirs has an entry for unknown package '{}'",
                name
            )));
        }
    }

    Ok(Configuration {
        deployment_base_dir: deployment_base_dir.clone(),
        packages: PackageMap::from_fn(|kind| artifacts.get(kind).0.clone()),
        remote_packages: PackageMap::from_fn(|kind| artifacts.get(kind).1.clone()),
        target_servers: TargetServers {
            master,
            slave,
            node_exporter,
            grafana,
        },
        prometheus_config: prometheus_config.clone(),
        grafana_config: grafana_config.clone(),
        topology,
        file_transfer: FileTransfer {
            source_server,
            remote_path,
        },
        http_proxy: ProxySettings {
            host: http_proxy.host.clone(),
            port: http_proxy.port.clone(),
            verify_ssl: http_proxy.verify_ssl.unwrap_or(true),
        },
        overwrite,
        package_source_root: doc
            .package_source_root
            .clone()
            .unwrap_or_else(|| DEFAULT_PACKAGE_SOURCE_ROOT.to_string()),
        extracted_dirs: PackageMap::from_fn(|kind| {
            doc.extracted_dirs
                .get(kind.name())
                .cloned()
                .unwrap_or_else(|| kind.default_extracted_dir().to_string())
        }),
    })
}

/// Parse `prometheus_deployment.cluster_mode`; only the integers 0 and 1 pass
pub fn topology_mode(value: Option<&Value>) -> PromstackResult<TopologyMode> {
    value
        .and_then(Value::as_u64)
        .and_then(TopologyMode::from_code)
        .ok_or_else(|| {
            PromstackError::validation("prometheus_deployment.cluster_mode must be 0 or 1")
        })
}

fn missing_key(doc: &ConfigDocument) -> PromstackError {
    let present = [
        doc.deployment_base_dir.is_some(),
        doc.packages.is_some(),
        doc.remote_packages.is_some(),
        doc.target_servers.is_some(),
        doc.prometheus_config.is_some(),
        doc.grafana_config.is_some(),
        doc.prometheus_deployment.is_some(),
        doc.file_transfer.is_some(),
        doc.http_proxy.is_some(),
    ];
    let key = REQUIRED_KEYS
        .iter()
        .zip(present)
        .find(|(_, present)| !present)
        .map(|(key, _)| *key)
        .unwrap_or("unknown");
    PromstackError::validation(format!("missing required key '{}'", key))
}

fn descriptors(entries: &[ServerEntry], group: &str) -> PromstackResult<Vec<ServerDescriptor>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| descriptor(entry, &format!("{}[{}]", group, index)))
        .collect()
}

fn descriptor(entry: &ServerEntry, location: &str) -> PromstackResult<ServerDescriptor> {
    let field = |value: &Option<String>, name: &str| {
        value.clone().ok_or_else(|| {
            let host = entry
                .ip
                .as_deref()
                .map(|ip| format!(" (host {})", ip))
                .unwrap_or_default();
            PromstackError::validation(format!("{}{} is missing {}", location, host, name))
        })
    };

    Ok(ServerDescriptor {
        ip: field(&entry.ip, "ip")?,
        ssh_user: field(&entry.ssh_user, "ssh_user")?,
        ssh_password: field(&entry.ssh_password, "ssh_password")?,
    })
}

fn overwrite_flag(value: &Value) -> PromstackResult<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        other => match other.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(PromstackError::validation("overwrite must be 0 or 1")),
        },
    }
}
