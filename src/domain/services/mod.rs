//! Domain Services
//!
//! Pure generation logic: inventory, task lists, playbooks, unit files and
//! the dispatch plan. Nothing here touches the filesystem or the network.

mod dispatch;
mod generator;
mod inventory;
mod playbook;
mod tasks;
mod units;

pub use dispatch::{DispatchPlan, Invocation, DISPATCH_ORDER};
pub use generator::{
    generate, DeploymentBundle, GRAFANA_CONFIG_FILE, INVENTORY_FILE, PROMETHEUS_CONFIG_FILE,
};
pub use inventory::{
    Inventory, InventoryGroup, CLUSTER_GROUP, GRAFANA_GROUP, NODE_EXPORTER_GROUP,
};
pub use playbook::{Play, Playbook};
pub use tasks::{rendered_files, role_tasks, RenderedFile};
pub use units::unit_file;
