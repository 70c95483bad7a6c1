//! Deploy Options

use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config.yml";
pub const DEFAULT_DOWNLOAD_DIR: &str = "installation_packages";

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Primary configuration document
    pub config_path: PathBuf,
    /// Directory created before artifacts are prepared
    pub download_dir: PathBuf,
    /// Overwrite flag from the command line; wins over the config key
    pub overwrite: Option<bool>,
    /// Generate artifacts and plan engine runs without touching the network
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            ..Self::default()
        }
    }

    pub fn with_download_dir(mut self, download_dir: impl Into<PathBuf>) -> Self {
        self.download_dir = download_dir.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: Option<bool>) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Effective overwrite flag: command line, then config, then off
    pub fn resolve_overwrite(&self, from_config: Option<bool>) -> bool {
        self.overwrite.or(from_config).unwrap_or(false)
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            overwrite: None,
            dry_run: false,
        }
    }
}
