//! Scenario: single-node topology
//!
//! One master, one agent, one dashboard host. The slave group is declared
//! but empty and the metrics playbook is limited to the master group.

use promstack::config::load;
use promstack::{generate, DispatchPlan, Inventory, PackageKind, TopologyMode};

use crate::common::*;

#[test]
fn scenario_single_node_inventory_and_plan() {
    let env = TestEnv::with_config(0);

    let config = load(&env.path("config.yml")).unwrap();
    assert_eq!(config.topology, TopologyMode::Single);
    assert!(config.target_servers.slave.is_empty());

    let inventory = Inventory::build(&config.target_servers, config.topology);
    let master = inventory.group("prometheus_master").unwrap();
    assert_eq!(
        master.entries,
        vec!["10.0.0.1 ansible_ssh_user=root ansible_ssh_pass=master-pw prometheus_role=master"]
    );
    assert!(inventory.group("prometheus_slave").unwrap().entries.is_empty());

    let plan = DispatchPlan::build(&config.configs_dir(), config.topology);
    let prometheus = plan
        .invocations
        .iter()
        .find(|invocation| invocation.role == PackageKind::Prometheus)
        .unwrap();
    assert_eq!(prometheus.limit.as_deref(), Some("prometheus_master"));
    assert_eq!(plan.inventory, env.path("deploy/configs/hosts"));
}

#[test]
fn scenario_single_node_bundle_contents() {
    let env = TestEnv::with_config(0);
    let config = load(&env.path("config.yml")).unwrap();

    let bundle = generate(&config).unwrap();
    let names: Vec<String> = bundle
        .files()
        .map(|file| file.path().display().to_string())
        .collect();
    assert_eq!(names.len(), 9);
    assert!(names.contains(&"prometheus_deploy.yml".to_string()));

    let prometheus_yml = bundle
        .files()
        .find(|file| file.path().ends_with("prometheus.yml"))
        .unwrap();
    assert!(prometheus_yml.content().contains("scrape_interval: 15s"));
}
