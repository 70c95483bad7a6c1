//! Scenario: master/replica cluster
//!
//! Slaves are validated, listed in the inventory and targeted by the
//! unrestricted metrics playbook run.

use promstack::config::load;
use promstack::{DispatchPlan, Inventory, TopologyMode};

use crate::common::*;

#[test]
fn scenario_cluster_lists_slaves_and_drops_limit() {
    let env = TestEnv::with_config(1);

    let config = load(&env.path("config.yml")).unwrap();
    assert_eq!(config.topology, TopologyMode::Cluster);
    assert_eq!(config.target_servers.slave.len(), 1);

    let rendered = Inventory::build(&config.target_servers, config.topology).render();
    assert!(rendered.contains(
        "[prometheus_slave]\n10.0.0.2 ansible_ssh_user=root ansible_ssh_pass=slave-pw prometheus_role=slave\n"
    ));

    let plan = DispatchPlan::build(&config.configs_dir(), config.topology);
    assert!(plan.invocations.iter().all(|invocation| invocation.limit.is_none()));
}

#[test]
fn scenario_cluster_without_slaves_is_rejected() {
    let env = TestEnv::new();
    let config = config_yaml(env.root.path(), 1).replace(
        "    slave:\n      - ip: 10.0.0.2\n        ssh_user: root\n",
        "",
    );
    env.write_config(&config);
    env.write_secrets(SECRETS_YAML);

    let err = load(&env.path("config.yml")).unwrap_err();
    assert_eq!(err.stage(), "config");
    assert!(err.to_string().contains("prometheus_servers.slave"), "{}", err);
}

#[test]
fn scenario_single_mode_ignores_incomplete_slave() {
    let env = TestEnv::new();
    let config = config_yaml(env.root.path(), 0).replace(
        "      - ip: 10.0.0.2\n        ssh_user: root\n",
        "      - ip: 10.0.0.2\n",
    );
    env.write_config(&config);
    env.write_secrets(SECRETS_YAML);

    let config = load(&env.path("config.yml")).unwrap();
    assert!(config.target_servers.slave.is_empty());
}
