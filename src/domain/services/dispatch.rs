//! Dispatch planning
//!
//! Decides which engine invocations run and in what order. Topology only
//! matters here: in single mode the Prometheus invocation is limited to the
//! master group.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::ServerRole;
use crate::domain::value_objects::{PackageKind, TopologyMode};

/// Fixed invocation order: agents, metrics, dashboards
pub const DISPATCH_ORDER: [PackageKind; 3] = [
    PackageKind::NodeExporter,
    PackageKind::Prometheus,
    PackageKind::Grafana,
];

/// One engine run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub role: PackageKind,
    pub playbook: PathBuf,
    /// Host group the run is restricted to, if any
    pub limit: Option<String>,
}

/// Ordered engine runs against one inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchPlan {
    pub inventory: PathBuf,
    pub invocations: Vec<Invocation>,
}

impl DispatchPlan {
    /// Plan runs for playbooks and inventory living in `configs_dir`
    pub fn build(configs_dir: &Path, topology: TopologyMode) -> Self {
        let invocations = DISPATCH_ORDER
            .into_iter()
            .map(|role| Invocation {
                role,
                playbook: configs_dir.join(role.playbook_file()),
                limit: match (role, topology) {
                    (PackageKind::Prometheus, TopologyMode::Single) => {
                        Some(ServerRole::Master.group().to_string())
                    }
                    _ => None,
                },
            })
            .collect();

        Self {
            inventory: configs_dir.join("hosts"),
            invocations,
        }
    }
}
