//! Transfer stage
//!
//! Copies prepared packages to the staging host over a single session. The
//! remote directory is created one path segment at a time; each package is
//! uploaded only when missing remotely or when overwrite is set.

use serde::Serialize;
use tracing::{error, info};

use crate::domain::entities::{PackageInfo, ServerDescriptor};
use crate::domain::ports::{StagingConnector, StagingSession};
use crate::domain::value_objects::PackageKind;
use crate::error::{PromstackError, PromstackResult};

/// What happened to each package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransferReport {
    pub uploaded: Vec<PackageKind>,
    pub skipped: Vec<PackageKind>,
    pub created_dirs: Vec<String>,
}

pub struct TransferStage<C: StagingConnector> {
    connector: C,
}

impl<C: StagingConnector> TransferStage<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Run the stage; the session is released even when a copy fails
    pub fn run(
        &self,
        source: &ServerDescriptor,
        remote_dir: &str,
        packages: &[PackageInfo],
        overwrite: bool,
    ) -> PromstackResult<TransferReport> {
        info!(host = %source.ip, remote_dir, "connecting to staging host");
        let mut session = self.connector.connect(source).map_err(|e| {
            error!(host = %source.ip, "staging connection failed: {}", e);
            e
        })?;

        let result = transfer_all(&mut session, remote_dir, packages, overwrite);
        let closed = session.close();

        let report = result?;
        closed?;
        info!(
            uploaded = report.uploaded.len(),
            skipped = report.skipped.len(),
            "package transfer complete"
        );
        Ok(report)
    }
}

fn transfer_all<S: StagingSession>(
    session: &mut S,
    remote_dir: &str,
    packages: &[PackageInfo],
    overwrite: bool,
) -> PromstackResult<TransferReport> {
    let mut report = TransferReport {
        created_dirs: ensure_remote_dir(session, remote_dir)?,
        ..TransferReport::default()
    };

    for package in packages {
        let remote_path = remote_archive_path(remote_dir, package.kind);

        if session.exists(&remote_path)? && !overwrite {
            info!(
                package = package.name(),
                remote_path = %remote_path,
                "package already on staging host, skipping"
            );
            report.skipped.push(package.kind);
            continue;
        }

        if !package.local_path.exists() {
            let err = PromstackError::transfer(format!(
                "{} package not found at {}",
                package.name(),
                package.local_path.display()
            ));
            error!(package = package.name(), "{}", err);
            return Err(err);
        }

        info!(package = package.name(), remote_path = %remote_path, "uploading package");
        if let Err(e) = session.upload(&package.local_path, &remote_path) {
            error!(package = package.name(), "upload failed: {}", e);
            return Err(e);
        }
        report.uploaded.push(package.kind);
    }

    Ok(report)
}

/// Create `remote_dir` segment by segment, returning the segments created
fn ensure_remote_dir<S: StagingSession>(
    session: &mut S,
    remote_dir: &str,
) -> PromstackResult<Vec<String>> {
    let mut created = Vec::new();
    if session.exists(remote_dir)? {
        return Ok(created);
    }

    info!(remote_dir, "creating remote directory");
    for segment in path_segments(remote_dir) {
        if !session.exists(&segment)? {
            session.create_dir(&segment)?;
            created.push(segment);
        }
    }
    Ok(created)
}

/// Cumulative prefixes of a remote path: `/a/b` gives `/a`, `/a/b`
pub fn path_segments(remote_dir: &str) -> Vec<String> {
    let absolute = remote_dir.starts_with('/');
    let mut current = String::new();
    remote_dir
        .split('/')
        .filter(|part| !part.is_empty())
        .map(|part| {
            if absolute || !current.is_empty() {
                current.push('/');
            }
            current.push_str(part);
            current.clone()
        })
        .collect()
}

/// Staging location of a package archive
pub fn remote_archive_path(remote_dir: &str, kind: PackageKind) -> String {
    format!("{}/{}", remote_dir.trim_end_matches('/'), kind.archive_name())
}
