//! Topology value object - single node or master/replica cluster
//!
//! - `Single` (0): only the master group receives the Prometheus deployment
//! - `Cluster` (1): master and slave groups both receive it

use serde::Serialize;

/// Deployment topology for the metrics collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyMode {
    Single,
    Cluster,
}

impl TopologyMode {
    /// Parse the numeric code used by `prometheus_deployment.cluster_mode`
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(TopologyMode::Single),
            1 => Some(TopologyMode::Cluster),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            TopologyMode::Single => 0,
            TopologyMode::Cluster => 1,
        }
    }

    /// Returns true if slave servers take part in the deployment
    pub fn is_cluster(&self) -> bool {
        matches!(self, TopologyMode::Cluster)
    }
}

impl std::fmt::Display for TopologyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyMode::Single => write!(f, "single"),
            TopologyMode::Cluster => write!(f, "cluster"),
        }
    }
}
