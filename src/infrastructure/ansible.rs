//! Automation engine backed by `ansible-playbook`
//!
//! The engine is spawned directly, never through a shell, and runs to
//! completion with stdout and stderr captured.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::ports::{AutomationEngine, EngineOutput};
use crate::domain::services::Invocation;
use crate::error::{PromstackError, PromstackResult};

pub const DEFAULT_ENGINE: &str = "ansible-playbook";

#[derive(Debug, Clone)]
pub struct AnsibleEngine {
    program: OsString,
}

impl Default for AnsibleEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE)
    }
}

impl AnsibleEngine {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments after the program name
    pub fn args(inventory: &Path, invocation: &Invocation) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-i".into(),
            inventory.as_os_str().to_owned(),
            invocation.playbook.as_os_str().to_owned(),
        ];
        if let Some(limit) = &invocation.limit {
            args.push("--limit".into());
            args.push(limit.into());
        }
        args
    }
}

impl AutomationEngine for AnsibleEngine {
    fn command_line(&self, inventory: &Path, invocation: &Invocation) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(Self::args(inventory, invocation).iter().map(|a| a.as_os_str()))
            .map(|part| part.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self, inventory: &Path, invocation: &Invocation) -> PromstackResult<EngineOutput> {
        let command = self.command_line(inventory, invocation);
        debug!(command = %command, "spawning engine");

        let output = Command::new(&self.program)
            .args(Self::args(inventory, invocation))
            .output()
            .map_err(|e| PromstackError::Execution {
                command: command.clone(),
                code: None,
                stderr: e.to_string(),
            })?;

        Ok(EngineOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
