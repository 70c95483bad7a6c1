//! systemd unit files for the three services

use crate::domain::value_objects::PackageKind;

const PROMETHEUS_UNIT: &str = "\
[Unit]
Description=Prometheus
Wants=network-online.target
After=network-online.target

[Service]
User=root
ExecStart=/usr/local/prometheus/prometheus --config.file=/usr/local/prometheus/prometheus.yml
ExecReload=/bin/kill -HUP $MAINPID
TimeoutStopSec=20s
Restart=always

[Install]
WantedBy=multi-user.target
";

const NODE_EXPORTER_UNIT: &str = "\
[Unit]
Description=Node Exporter
Wants=network-online.target
After=network-online.target

[Service]
User=root
ExecStart=/usr/local/node_exporter/node_exporter
ExecReload=/bin/kill -HUP $MAINPID
TimeoutStopSec=20s
Restart=always

[Install]
WantedBy=multi-user.target
";

const GRAFANA_UNIT: &str = "\
[Unit]
Description=Grafana
Documentation=http://docs.grafana.org
Wants=network-online.target
After=network-online.target

[Service]
User=root
WorkingDirectory=/usr/local/grafana
ExecStart=/usr/local/grafana/bin/grafana-server --config=/usr/local/grafana/conf/grafana.ini
Restart=always

[Install]
WantedBy=multi-user.target
";

/// Unit file contents for `kind`
pub fn unit_file(kind: PackageKind) -> &'static str {
    match kind {
        PackageKind::Prometheus => PROMETHEUS_UNIT,
        PackageKind::NodeExporter => NODE_EXPORTER_UNIT,
        PackageKind::Grafana => GRAFANA_UNIT,
    }
}
