//! Inventory service
//!
//! Builds the INI-style host inventory the automation engine reads. Group
//! order is fixed: metrics master, metrics slave, agents, dashboards, then the
//! parent group declaring both metrics groups as children.
//!
//! The slave group header is written in every topology so the parent group
//! always resolves; its hosts are only listed in cluster mode.

use crate::config::TargetServers;
use crate::domain::entities::{ServerDescriptor, ServerRole};
use crate::domain::value_objects::TopologyMode;

pub const NODE_EXPORTER_GROUP: &str = "node_exporter_servers";
pub const GRAFANA_GROUP: &str = "grafana_servers";
pub const CLUSTER_GROUP: &str = "prometheus_cluster:children";

/// One `[name]` section and its lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryGroup {
    pub name: String,
    pub entries: Vec<String>,
}

impl InventoryGroup {
    fn hosts(name: &str, servers: &[ServerDescriptor], role: Option<ServerRole>) -> Self {
        Self {
            name: name.to_string(),
            entries: servers
                .iter()
                .map(|server| server.inventory_line(role))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    groups: Vec<InventoryGroup>,
}

impl Inventory {
    pub fn build(targets: &TargetServers, topology: TopologyMode) -> Self {
        let slaves: &[ServerDescriptor] = if topology.is_cluster() {
            &targets.slave
        } else {
            &[]
        };

        let groups = vec![
            InventoryGroup::hosts(
                ServerRole::Master.group(),
                &targets.master,
                Some(ServerRole::Master),
            ),
            InventoryGroup::hosts(ServerRole::Slave.group(), slaves, Some(ServerRole::Slave)),
            InventoryGroup::hosts(NODE_EXPORTER_GROUP, &targets.node_exporter, None),
            InventoryGroup::hosts(GRAFANA_GROUP, &targets.grafana, None),
            InventoryGroup {
                name: CLUSTER_GROUP.to_string(),
                entries: vec![
                    ServerRole::Master.group().to_string(),
                    ServerRole::Slave.group().to_string(),
                ],
            },
        ];

        Self { groups }
    }

    pub fn groups(&self) -> &[InventoryGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&InventoryGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn render(&self) -> String {
        let sections: Vec<String> = self
            .groups
            .iter()
            .map(|group| {
                let mut section = format!("[{}]\n", group.name);
                for entry in &group.entries {
                    section.push_str(entry);
                    section.push('\n');
                }
                section
            })
            .collect();
        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> TargetServers {
        TargetServers {
            master: vec![ServerDescriptor::new("10.0.0.1", "root", "m")],
            slave: vec![ServerDescriptor::new("10.0.0.2", "root", "s")],
            node_exporter: vec![
                ServerDescriptor::new("10.0.0.3", "root", "n3"),
                ServerDescriptor::new("10.0.0.4", "ops", "n4"),
            ],
            grafana: vec![ServerDescriptor::new("10.0.0.5", "root", "g")],
        }
    }

    #[test]
    fn group_order_is_fixed() {
        let inventory = Inventory::build(&targets(), TopologyMode::Cluster);
        let names: Vec<_> = inventory.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "prometheus_master",
                "prometheus_slave",
                "node_exporter_servers",
                "grafana_servers",
                "prometheus_cluster:children",
            ]
        );
    }

    #[test]
    fn single_mode_declares_empty_slave_group() {
        let inventory = Inventory::build(&targets(), TopologyMode::Single);
        let slave = inventory.group("prometheus_slave").unwrap();
        assert!(slave.entries.is_empty());

        let rendered = inventory.render();
        assert!(rendered.contains("[prometheus_slave]\n\n[node_exporter_servers]"));
        assert!(!rendered.contains("10.0.0.2"));
    }

    #[test]
    fn cluster_mode_lists_slaves_with_role() {
        let rendered = Inventory::build(&targets(), TopologyMode::Cluster).render();
        assert!(rendered.contains(
            "[prometheus_slave]\n10.0.0.2 ansible_ssh_user=root ansible_ssh_pass=s prometheus_role=slave\n"
        ));
    }

    #[test]
    fn agent_hosts_have_no_role() {
        let inventory = Inventory::build(&targets(), TopologyMode::Single);
        let agents = inventory.group(NODE_EXPORTER_GROUP).unwrap();
        assert_eq!(
            agents.entries,
            vec![
                "10.0.0.3 ansible_ssh_user=root ansible_ssh_pass=n3".to_string(),
                "10.0.0.4 ansible_ssh_user=ops ansible_ssh_pass=n4".to_string(),
            ]
        );
    }

    #[test]
    fn render_ends_with_children_group() {
        let rendered = Inventory::build(&targets(), TopologyMode::Single).render();
        assert!(rendered.ends_with(
            "[prometheus_cluster:children]\nprometheus_master\nprometheus_slave\n"
        ));
    }
}
