//! CLI Argument Parsing
//!
//! A single command with flat flags. `--overwrite` is kept as `0|1` so
//! existing invocations keep working.

use std::path::PathBuf;

use clap::Parser;

use crate::application::deploy::{DEFAULT_CONFIG_PATH, DEFAULT_DOWNLOAD_DIR};
use crate::application::DeployOptions;
use crate::infrastructure::DEFAULT_ENGINE;

use super::logging::LogFormat;

/// Provision Prometheus, node_exporter and Grafana onto a fleet of hosts
#[derive(Parser, Debug)]
#[command(name = "promstack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Primary configuration document
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, value_name = "PATH")]
    pub config_path: PathBuf,

    /// Directory created for downloaded packages
    #[arg(long, default_value = DEFAULT_DOWNLOAD_DIR, value_name = "DIR")]
    pub download_dir: PathBuf,

    /// Overwrite existing packages locally and on the staging host (0 or 1)
    #[arg(long, value_name = "0|1", value_parser = clap::value_parser!(u8).range(0..=1))]
    pub overwrite: Option<u8>,

    /// Automation engine executable
    #[arg(long, default_value = DEFAULT_ENGINE, value_name = "PROGRAM")]
    pub engine: String,

    /// Generate files and print the engine runs without downloading,
    /// transferring or running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn overwrite_flag(&self) -> Option<bool> {
        self.overwrite.map(|value| value == 1)
    }

    pub fn deploy_options(&self) -> DeployOptions {
        DeployOptions::new(&self.config_path)
            .with_download_dir(&self.download_dir)
            .with_overwrite(self.overwrite_flag())
            .with_dry_run(self.dry_run)
    }
}
