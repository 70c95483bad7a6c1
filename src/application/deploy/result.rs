//! Deploy Result

use std::path::PathBuf;

use serde::Serialize;

use crate::application::transfer::TransferReport;
use crate::domain::entities::PackageInfo;
use crate::domain::services::DispatchPlan;
use crate::domain::value_objects::{PackageKind, TopologyMode};

/// One finished engine run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineRun {
    pub role: PackageKind,
    pub command: String,
    pub code: Option<i32>,
}

/// Result of a successful deploy
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub topology: TopologyMode,
    pub overwrite: bool,
    pub dry_run: bool,
    pub packages: Vec<PackageInfo>,
    /// `None` in dry-run mode
    pub transfer: Option<TransferReport>,
    /// Generated files, absolute
    pub written: Vec<PathBuf>,
    pub plan: DispatchPlan,
    /// Command line of each planned run, in plan order
    pub commands: Vec<String>,
    pub engine_runs: Vec<EngineRun>,
}
