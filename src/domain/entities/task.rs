//! Task entity - one declarative unit of remote work
//!
//! Tasks are built as typed operations and only turned into the generic
//! document form the automation engine reads at serialization time.
//! Order inside a task list matters: probe, guarded install, symlink,
//! rendered files, service restart.

use serde_yaml_ng::{Mapping, Value};

/// Condition attached to a task, referencing an earlier probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// Run only when the probe registered under `register` failed
    NotInstalled { register: String },
}

impl Guard {
    pub fn expression(&self) -> String {
        match self {
            Guard::NotInstalled { register } => format!("{}.rc != 0", register),
        }
    }
}

/// Operation kinds understood by the automation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Non-fatal `which`-style check whose result is registered
    ProbeInstall { command: String, register: String },
    /// Copy an archive from the controller and unpack it on the target
    CopyAndExtract {
        src: String,
        staging_path: String,
        dest_dir: String,
    },
    /// Point a stable path at a versioned directory
    CreateSymlink { src: String, dest: String },
    /// Render a file from the playbook directory to its final location
    RenderTemplate { src: String, dest: String },
    /// Reload the service manager and restart a unit
    ManageService {
        name: String,
        daemon_reload: bool,
        enabled: bool,
    },
}

impl Operation {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::ProbeInstall { .. } => "probe-install",
            Operation::CopyAndExtract { .. } => "conditional-copy-and-extract",
            Operation::CreateSymlink { .. } => "create-symlink",
            Operation::RenderTemplate { .. } => "render-template",
            Operation::ManageService { .. } => "manage-service",
        }
    }
}

/// A named, optionally guarded operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub operation: Operation,
    pub guard: Option<Guard>,
}

impl Task {
    pub fn new(name: impl Into<String>, operation: Operation) -> Self {
        Self {
            name: name.into(),
            operation,
            guard: None,
        }
    }

    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Convert into the engine's task document
    pub fn to_document(&self) -> Value {
        let mut doc = Mapping::new();
        doc.insert(key("name"), Value::from(self.name.as_str()));

        match &self.operation {
            Operation::ProbeInstall { command, register } => {
                doc.insert(key("command"), Value::from(command.as_str()));
                doc.insert(key("register"), Value::from(register.as_str()));
                doc.insert(key("ignore_errors"), Value::from(true));
            }
            Operation::CopyAndExtract {
                src,
                staging_path,
                dest_dir,
            } => {
                let copy = mapping([
                    ("src", Value::from(src.as_str())),
                    ("dest", Value::from(staging_path.as_str())),
                ]);
                let unarchive = mapping([
                    ("src", Value::from(staging_path.as_str())),
                    ("dest", Value::from(dest_dir.as_str())),
                    ("remote_src", Value::from(true)),
                ]);
                let label = self.name.as_str();
                doc.insert(
                    key("block"),
                    Value::Sequence(vec![
                        mapping([
                            ("name", Value::from(format!("{}: copy archive", label))),
                            ("copy", copy),
                        ]),
                        mapping([
                            ("name", Value::from(format!("{}: extract archive", label))),
                            ("unarchive", unarchive),
                        ]),
                    ]),
                );
            }
            Operation::CreateSymlink { src, dest } => {
                doc.insert(
                    key("file"),
                    mapping([
                        ("src", Value::from(src.as_str())),
                        ("dest", Value::from(dest.as_str())),
                        ("state", Value::from("link")),
                        ("force", Value::from(true)),
                    ]),
                );
            }
            Operation::RenderTemplate { src, dest } => {
                doc.insert(
                    key("template"),
                    mapping([
                        ("src", Value::from(src.as_str())),
                        ("dest", Value::from(dest.as_str())),
                    ]),
                );
            }
            Operation::ManageService {
                name,
                daemon_reload,
                enabled,
            } => {
                doc.insert(
                    key("systemd"),
                    mapping([
                        ("name", Value::from(name.as_str())),
                        ("state", Value::from("restarted")),
                        ("daemon_reload", Value::from(*daemon_reload)),
                        ("enabled", Value::from(*enabled)),
                    ]),
                );
            }
        }

        if let Some(guard) = &self.guard {
            doc.insert(key("when"), Value::from(guard.expression()));
        }

        Value::Mapping(doc)
    }
}

fn key(name: &str) -> Value {
    Value::from(name)
}

/// Build an ordered mapping from literal entries
pub(crate) fn mapping<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Mapping(
        entries
            .into_iter()
            .map(|(k, v)| (Value::from(k), v))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(doc: &'a Value, name: &str) -> &'a Value {
        doc.get(name)
            .unwrap_or_else(|| panic!("missing field {name} in {doc:?}"))
    }

    #[test]
    fn probe_document_ignores_errors() {
        let task = Task::new(
            "Check if Prometheus is installed",
            Operation::ProbeInstall {
                command: "which prometheus".to_string(),
                register: "prometheus_installed".to_string(),
            },
        );

        let doc = task.to_document();
        assert_eq!(field(&doc, "command").as_str(), Some("which prometheus"));
        assert_eq!(field(&doc, "register").as_str(), Some("prometheus_installed"));
        assert_eq!(field(&doc, "ignore_errors").as_bool(), Some(true));
        assert!(doc.get("when").is_none());
    }

    #[test]
    fn copy_and_extract_becomes_guarded_block() {
        let task = Task::new(
            "Install Grafana",
            Operation::CopyAndExtract {
                src: "{{ grafana_package }}".to_string(),
                staging_path: "/tmp/grafana.tar.gz".to_string(),
                dest_dir: "/usr/local/".to_string(),
            },
        )
        .with_guard(Guard::NotInstalled {
            register: "grafana_installed".to_string(),
        });

        let doc = task.to_document();
        assert_eq!(field(&doc, "when").as_str(), Some("grafana_installed.rc != 0"));

        let block = field(&doc, "block").as_sequence().expect("block is a list");
        assert_eq!(block.len(), 2);
        let copy = field(&block[0], "copy");
        assert_eq!(field(copy, "dest").as_str(), Some("/tmp/grafana.tar.gz"));
        let unarchive = field(&block[1], "unarchive");
        assert_eq!(field(unarchive, "src").as_str(), Some("/tmp/grafana.tar.gz"));
        assert_eq!(field(unarchive, "remote_src").as_bool(), Some(true));
    }

    #[test]
    fn symlink_is_forced_link() {
        let task = Task::new(
            "Link",
            Operation::CreateSymlink {
                src: "/usr/local/grafana-v11.3.1".to_string(),
                dest: "/usr/local/grafana".to_string(),
            },
        );
        let file = field(&task.to_document(), "file").clone();
        assert_eq!(field(&file, "state").as_str(), Some("link"));
        assert_eq!(field(&file, "force").as_bool(), Some(true));
    }

    #[test]
    fn manage_service_document() {
        let task = Task::new(
            "Start",
            Operation::ManageService {
                name: "node_exporter".to_string(),
                daemon_reload: true,
                enabled: true,
            },
        );
        let systemd = field(&task.to_document(), "systemd").clone();
        assert_eq!(field(&systemd, "state").as_str(), Some("restarted"));
        assert_eq!(field(&systemd, "daemon_reload").as_bool(), Some(true));
        assert_eq!(field(&systemd, "enabled").as_bool(), Some(true));
    }

    #[test]
    fn operation_kind_names() {
        let op = Operation::RenderTemplate {
            src: "a".to_string(),
            dest: "b".to_string(),
        };
        assert_eq!(op.kind(), "render-template");
    }
}
