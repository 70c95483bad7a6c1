//! promstack - provision a Prometheus monitoring stack
//!
//! Usage: promstack [--config-path PATH] [--download-dir DIR] [--overwrite 0|1] [--dry-run]
//!
//! Exits 0 on success and 1 on the first fatal error.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use promstack::presentation::{
    create_deploy_use_case, init_logging, output, render_report, Cli, OutputFormat,
};
use promstack::PromstackError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet, cli.log_format);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let stage = err
                .downcast_ref::<PromstackError>()
                .map(PromstackError::stage)
                .unwrap_or("output");
            error!(stage, "{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.deploy_options();
    let report = create_deploy_use_case(&cli.engine).execute(&options)?;

    info!("{}", output::summary_line(&report));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(&mut out, &report, OutputFormat::from_json_flag(cli.json))
        .context("failed to write report")?;
    Ok(())
}
