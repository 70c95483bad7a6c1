//! Role task lists
//!
//! Every role follows the same five steps: probe, guarded install, symlink,
//! rendered files, service restart. Only the package and its rendered files
//! differ between roles.

use crate::domain::entities::{Guard, Operation, Task};
use crate::domain::value_objects::PackageKind;

const INSTALL_ROOT: &str = "/usr/local/";
const UNIT_DIR: &str = "/etc/systemd/system";

/// A file rendered from the playbook directory onto the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedFile {
    pub name: &'static str,
    pub file: &'static str,
    pub dest_dir: &'static str,
}

/// Files rendered onto hosts of `kind`, in task order
pub fn rendered_files(kind: PackageKind) -> Vec<RenderedFile> {
    let unit = |file| RenderedFile {
        name: "systemd service",
        file,
        dest_dir: UNIT_DIR,
    };
    match kind {
        PackageKind::Prometheus => vec![
            RenderedFile {
                name: "configuration",
                file: "prometheus.yml",
                dest_dir: "/usr/local/prometheus",
            },
            unit("prometheus.service"),
        ],
        PackageKind::NodeExporter => vec![unit("node_exporter.service")],
        PackageKind::Grafana => vec![
            RenderedFile {
                name: "configuration",
                file: "grafana.ini",
                dest_dir: "/usr/local/grafana/conf",
            },
            unit("grafana.service"),
        ],
    }
}

/// Task list for one role
///
/// `extracted_dir` is the directory the archive unpacks to under `/usr/local`.
pub fn role_tasks(kind: PackageKind, extracted_dir: &str) -> Vec<Task> {
    let label = kind.label();
    let register = kind.probe_register();

    let mut tasks = vec![
        Task::new(
            format!("Check if {} is installed", label),
            Operation::ProbeInstall {
                command: format!("which {}", kind.binary()),
                register: register.clone(),
            },
        ),
        Task::new(
            format!("Install {}", label),
            Operation::CopyAndExtract {
                src: format!("{{{{ {} }}}}", kind.package_var()),
                staging_path: kind.staging_archive(),
                dest_dir: INSTALL_ROOT.to_string(),
            },
        )
        .with_guard(Guard::NotInstalled { register }),
        Task::new(
            format!("Create symlink for {} directory", label),
            Operation::CreateSymlink {
                src: format!("{}{}", INSTALL_ROOT, extracted_dir),
                dest: kind.install_dir(),
            },
        ),
    ];

    tasks.extend(rendered_files(kind).into_iter().map(|rendered| {
        Task::new(
            format!("Render {} {}", label, rendered.name),
            Operation::RenderTemplate {
                src: format!("{{{{ playbook_dir }}}}/{}", rendered.file),
                dest: format!("{}/{}", rendered.dest_dir, rendered.file),
            },
        )
    }));

    tasks.push(Task::new(
        format!("Start {} service", label),
        Operation::ManageService {
            name: kind.service_name().to_string(),
            daemon_reload: true,
            enabled: true,
        },
    ));

    tasks
}
