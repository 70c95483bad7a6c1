//! Playbook documents
//!
//! A playbook is a list of plays, each binding a host group to a task list and
//! the variables its tasks reference. The Prometheus playbook carries two plays
//! (master and slave) that differ only in `is_master`; which of them actually
//! runs is decided at dispatch time.

use serde_yaml_ng::{Mapping, Value};

use crate::config::Configuration;
use crate::domain::entities::{ServerRole, Task};
use crate::domain::value_objects::PackageKind;
use crate::error::PromstackResult;

use super::inventory::{GRAFANA_GROUP, NODE_EXPORTER_GROUP};
use super::tasks::role_tasks;

#[derive(Debug, Clone, PartialEq)]
pub struct Play {
    pub hosts: String,
    pub become_root: bool,
    pub vars: Mapping,
    pub tasks: Vec<Task>,
}

impl Play {
    pub fn to_document(&self) -> Value {
        let mut doc = Mapping::new();
        doc.insert("hosts".into(), Value::from(self.hosts.as_str()));
        doc.insert("become".into(), Value::from(self.become_root));
        doc.insert("vars".into(), Value::Mapping(self.vars.clone()));
        doc.insert(
            "tasks".into(),
            Value::Sequence(self.tasks.iter().map(Task::to_document).collect()),
        );
        Value::Mapping(doc)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playbook {
    pub kind: PackageKind,
    pub plays: Vec<Play>,
}

impl Playbook {
    /// Build the playbook deploying `kind`
    pub fn for_role(kind: PackageKind, config: &Configuration) -> Self {
        let tasks = role_tasks(kind, config.extracted_dirs.get(kind));
        let package_var = (
            Value::from(kind.package_var()),
            Value::from(config.controller_package_path(kind)),
        );

        let play = |hosts: &str, extra: Option<(&str, Value)>| {
            let mut vars = Mapping::new();
            vars.insert(package_var.0.clone(), package_var.1.clone());
            if let Some((name, value)) = extra {
                vars.insert(name.into(), value);
            }
            Play {
                hosts: hosts.to_string(),
                become_root: true,
                vars,
                tasks: tasks.clone(),
            }
        };

        let plays = match kind {
            PackageKind::Prometheus => [ServerRole::Master, ServerRole::Slave]
                .into_iter()
                .map(|role| {
                    play(
                        role.group(),
                        Some(("is_master", Value::from(role == ServerRole::Master))),
                    )
                })
                .collect(),
            PackageKind::NodeExporter => vec![play(NODE_EXPORTER_GROUP, None)],
            PackageKind::Grafana => vec![play(GRAFANA_GROUP, None)],
        };

        Self { kind, plays }
    }

    pub fn file_name(&self) -> String {
        self.kind.playbook_file()
    }

    pub fn to_document(&self) -> Value {
        Value::Sequence(self.plays.iter().map(Play::to_document).collect())
    }

    pub fn to_yaml(&self) -> PromstackResult<String> {
        Ok(serde_yaml_ng::to_string(&self.to_document())?)
    }
}
