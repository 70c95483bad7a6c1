//! Deploy Use Case
//!
//! Orchestrates the provisioning run:
//! 1. Load and validate configuration
//! 2. Prepare artifacts and rebuild the configuration with their paths
//! 3. Transfer artifacts to the staging host
//! 4. Create local working directories and write generated files
//! 5. Invoke the automation engine once per playbook
//!
//! Stages run strictly in sequence. The first failure is logged with its
//! stage and returned unchanged; nothing is retried.

use std::fs;
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::application::prepare::ArtifactPreparer;
use crate::application::transfer::TransferStage;
use crate::config::{self, Configuration};
use crate::domain::entities::PackageInfo;
use crate::domain::ports::{ArtifactFetcher, AutomationEngine, StagingConnector};
use crate::domain::services::{generate, DispatchPlan};
use crate::error::{PromstackError, PromstackResult};

use super::options::DeployOptions;
use super::result::{DeployReport, EngineRun};

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<F, C, E>
where
    F: ArtifactFetcher,
    C: StagingConnector,
    E: AutomationEngine,
{
    preparer: ArtifactPreparer<F>,
    transfer: TransferStage<C>,
    engine: E,
}

impl<F, C, E> DeployUseCase<F, C, E>
where
    F: ArtifactFetcher,
    C: StagingConnector,
    E: AutomationEngine,
{
    pub fn new(fetcher: F, connector: C, engine: E) -> Self {
        Self {
            preparer: ArtifactPreparer::new(fetcher),
            transfer: TransferStage::new(connector),
            engine,
        }
    }

    pub fn execute(&self, options: &DeployOptions) -> PromstackResult<DeployReport> {
        fs::create_dir_all(&options.download_dir).map_err(|e| {
            error!(dir = %options.download_dir.display(), "cannot create download directory: {}", e);
            PromstackError::from(e)
        })?;

        info!(path = %options.config_path.display(), "loading configuration");
        let config = config::load(&options.config_path).map_err(logged)?;
        let overwrite = options.resolve_overwrite(config.overwrite);
        info!(
            topology = %config.topology,
            overwrite,
            dry_run = options.dry_run,
            "configuration loaded"
        );

        let (config, packages, transfer) = if options.dry_run {
            let packages = configured_packages(&config);
            (config, packages, None)
        } else {
            let packages = self
                .preparer
                .prepare(
                    &config.packages,
                    &config.remote_packages,
                    &config.http_proxy,
                    overwrite,
                )
                .map_err(logged)?;
            let config = config.with_package_paths(&packages);
            let report = self
                .transfer
                .run(
                    &config.file_transfer.source_server,
                    &config.file_transfer.remote_path,
                    &packages,
                    overwrite,
                )
                .map_err(logged)?;
            (config, packages, Some(report))
        };

        let written = write_artifacts(&config).map_err(logged)?;

        let plan = DispatchPlan::build(&config.configs_dir(), config.topology);
        let commands: Vec<String> = plan
            .invocations
            .iter()
            .map(|invocation| self.engine.command_line(&plan.inventory, invocation))
            .collect();

        let engine_runs = if options.dry_run {
            for command in &commands {
                info!(command = %command, "dry run, not invoking");
            }
            Vec::new()
        } else {
            self.dispatch(&plan).map_err(logged)?
        };

        Ok(DeployReport {
            topology: config.topology,
            overwrite,
            dry_run: options.dry_run,
            packages,
            transfer,
            written,
            plan,
            commands,
            engine_runs,
        })
    }

    fn dispatch(&self, plan: &DispatchPlan) -> PromstackResult<Vec<EngineRun>> {
        let mut runs = Vec::with_capacity(plan.invocations.len());

        for invocation in &plan.invocations {
            let command = self.engine.command_line(&plan.inventory, invocation);
            info!(role = invocation.role.name(), command = %command, "running automation engine");

            let output = self.engine.run(&plan.inventory, invocation)?;
            if !output.stdout.is_empty() {
                info!(role = invocation.role.name(), "engine output:\n{}", output.stdout);
            }
            if !output.stderr.is_empty() {
                warn!(role = invocation.role.name(), "engine stderr:\n{}", output.stderr);
            }

            if !output.success() {
                return Err(PromstackError::Execution {
                    command,
                    code: output.code,
                    stderr: output.stderr,
                });
            }

            runs.push(EngineRun {
                role: invocation.role,
                command,
                code: output.code,
            });
        }

        Ok(runs)
    }
}

/// Package list used when nothing is fetched
fn configured_packages(config: &Configuration) -> Vec<PackageInfo> {
    config
        .packages
        .iter()
        .map(|(kind, path)| {
            PackageInfo::new(kind, path.clone(), config.remote_packages.get(kind).clone())
        })
        .collect()
}

fn write_artifacts(config: &Configuration) -> PromstackResult<Vec<std::path::PathBuf>> {
    let configs_dir = config.configs_dir();
    create_dir(&config.packages_dir())?;
    create_dir(&configs_dir)?;

    let bundle = generate(config)?;
    let mut written = Vec::new();
    for file in bundle.files() {
        let path = configs_dir.join(file.path());
        fs::write(&path, file.content())?;
        debug!(path = %path.display(), bytes = file.content().len(), "wrote file");
        written.push(path);
    }
    info!(dir = %configs_dir.display(), files = written.len(), "generated deployment files");
    Ok(written)
}

fn create_dir(path: &Path) -> PromstackResult<()> {
    fs::create_dir_all(path)?;
    debug!(path = %path.display(), "ensured directory");
    Ok(())
}

/// Log an error with its stage where it is detected, then pass it on
fn logged(err: PromstackError) -> PromstackError {
    error!(stage = err.stage(), "{}", err);
    err
}
