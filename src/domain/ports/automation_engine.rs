//! AutomationEngine port - runs a task-list document against an inventory

use std::path::Path;

use crate::domain::services::Invocation;
use crate::error::PromstackResult;

/// Captured result of one engine run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineOutput {
    /// Process exit code, `None` if terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl EngineOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait AutomationEngine {
    /// Command line shown in logs and dry-run output
    fn command_line(&self, inventory: &Path, invocation: &Invocation) -> String;

    /// Run to completion and capture output
    ///
    /// Returns `Err` only if the engine could not be started; a non-zero exit
    /// is reported through `EngineOutput::code`.
    fn run(&self, inventory: &Path, invocation: &Invocation) -> PromstackResult<EngineOutput>;
}
