//! Deploy Module
//!
//! Orchestrates one provisioning run.
//!
//! ## Structure
//!
//! - `options` - Run options (`DeployOptions`)
//! - `result` - Run report (`DeployReport`, `EngineRun`)
//! - `use_case` - Stage sequencing (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use promstack::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(fetcher, connector, engine);
//! let report = use_case.execute(&DeployOptions::new("config.yml"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, DEFAULT_CONFIG_PATH, DEFAULT_DOWNLOAD_DIR};
pub use result::{DeployReport, EngineRun};
pub use use_case::DeployUseCase;
