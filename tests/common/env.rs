//! Test environment for running the promstack binary in isolation.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::{config_yaml, SECRETS_FILE, SECRETS_YAML};

/// Result of running the promstack binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temporary working directory; the binary always runs from its root.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// Environment with a valid config and secrets document
    pub fn with_config(cluster_mode: u8) -> Self {
        let env = Self::new();
        env.write_config(&config_yaml(env.root.path(), cluster_mode));
        env.write_secrets(SECRETS_YAML);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.path("config.yml"), content).unwrap();
    }

    pub fn write_secrets(&self, content: &str) {
        std::fs::write(self.path(SECRETS_FILE), content).unwrap();
    }

    pub fn generated(&self, name: &str) -> PathBuf {
        self.path("deploy/configs").join(name)
    }

    pub fn read_generated(&self, name: &str) -> String {
        std::fs::read_to_string(self.generated(name)).unwrap()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        run_in(self.root.path(), args)
    }
}

/// Run the binary from `cwd` with logging forced to plain text
pub fn run_in(cwd: &Path, args: &[&str]) -> TestResult {
    let output = Command::new(env!("CARGO_BIN_EXE_promstack"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute promstack");

    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
