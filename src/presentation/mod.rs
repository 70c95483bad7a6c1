//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Logging setup (via tracing-subscriber)
//! - Creating the use case with infrastructure dependencies
//! - Report formatting (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use promstack::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case("ansible-playbook");
//! let report = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::Cli;
pub use factory::create_deploy_use_case;
pub use logging::{init_logging, LogFormat};
pub use output::{render_report, OutputFormat};
