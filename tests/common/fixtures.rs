//! Configuration fixtures
//!
//! `config_yaml` renders a complete primary document rooted at `base`; tests
//! remove or replace single lines to produce the broken variants they need.

use std::path::Path;

pub const SECRETS_FILE: &str = "secrets.yml";

pub fn config_yaml(base: &Path, cluster_mode: u8) -> String {
    let root = base.display();
    format!(
        r#"deployment_base_dir: {root}/deploy
server_secrets_file: {SECRETS_FILE}
packages:
  prometheus: {root}/pkgs/prometheus.tar.gz
  node_exporter: {root}/pkgs/node_exporter.tar.gz
  grafana: {root}/pkgs/grafana.tar.gz
remote_packages:
  prometheus: https://example.com/prometheus.tar.gz
  node_exporter: https://example.com/node_exporter.tar.gz
  grafana: https://example.com/grafana.tar.gz
target_servers:
  prometheus_servers:
    master:
      ip: 10.0.0.1
      ssh_user: root
    slave:
      - ip: 10.0.0.2
        ssh_user: root
  node_exporter_servers:
    - ip: 10.0.0.3
      ssh_user: root
  grafana_servers:
    - ip: 10.0.0.5
      ssh_user: root
prometheus_config:
  global:
    scrape_interval: 15s
grafana_config:
  server:
    http_port: 3000
prometheus_deployment:
  cluster_mode: {cluster_mode}
file_transfer:
  source_server:
    ip: 10.0.0.9
    ssh_user: deploy
  remote_path: /data/packages
http_proxy:
  verify_ssl: true
"#
    )
}

pub const SECRETS_YAML: &str = r#"server_credentials:
  prometheus:
    master:
      ip: 10.0.0.1
      ssh_password: master-pw
    slave:
      - ip: 10.0.0.2
        ssh_password: slave-pw
  node_exporter:
    - ip: 10.0.0.3
      ssh_password: agent-pw
  grafana:
    - ip: 10.0.0.5
      ssh_password: grafana-pw
  source:
    ip: 10.0.0.9
    ssh_password: source-pw
"#;
