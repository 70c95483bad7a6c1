//! Deployment generator
//!
//! Renders every artifact the automation engine needs from a validated
//! configuration. Pure: nothing is written here; the caller decides where the
//! files land.

use crate::config::Configuration;
use crate::domain::entities::GeneratedFile;
use crate::domain::value_objects::PackageKind;
use crate::error::PromstackResult;

use super::inventory::Inventory;
use super::playbook::Playbook;
use super::units::unit_file;

pub const INVENTORY_FILE: &str = "hosts";
pub const PROMETHEUS_CONFIG_FILE: &str = "prometheus.yml";
pub const GRAFANA_CONFIG_FILE: &str = "grafana.ini";

/// Everything generated for one run, paths relative to the configs directory
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentBundle {
    pub inventory: GeneratedFile,
    pub service_configs: Vec<GeneratedFile>,
    pub units: Vec<GeneratedFile>,
    pub playbooks: Vec<GeneratedFile>,
}

impl DeploymentBundle {
    /// All files in write order
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.service_configs
            .iter()
            .chain(std::iter::once(&self.inventory))
            .chain(self.units.iter())
            .chain(self.playbooks.iter())
    }
}

pub fn generate(config: &Configuration) -> PromstackResult<DeploymentBundle> {
    let service_configs = vec![
        GeneratedFile::new(
            PROMETHEUS_CONFIG_FILE,
            serde_yaml_ng::to_string(&config.prometheus_config)?,
        ),
        GeneratedFile::new(
            GRAFANA_CONFIG_FILE,
            serde_yaml_ng::to_string(&config.grafana_config)?,
        ),
    ];

    let inventory = GeneratedFile::new(
        INVENTORY_FILE,
        Inventory::build(&config.target_servers, config.topology).render(),
    );

    let units = PackageKind::ALL
        .into_iter()
        .map(|kind| GeneratedFile::new(kind.unit_file(), unit_file(kind)))
        .collect();

    let playbooks = PackageKind::ALL
        .into_iter()
        .map(|kind| {
            let playbook = Playbook::for_role(kind, config);
            Ok(GeneratedFile::new(playbook.file_name(), playbook.to_yaml()?))
        })
        .collect::<PromstackResult<Vec<_>>>()?;

    Ok(DeploymentBundle {
        inventory,
        service_configs,
        units,
        playbooks,
    })
}
