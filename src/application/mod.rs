//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain generation rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Stages
//!
//! - `ArtifactPreparer` - Ensures package archives exist locally
//! - `TransferStage` - Copies archives to the staging host
//! - `DeployUseCase` - Sequences every stage of a run

pub mod deploy;
pub mod prepare;
pub mod transfer;

pub use deploy::{DeployOptions, DeployReport, DeployUseCase, EngineRun};
pub use prepare::ArtifactPreparer;
pub use transfer::{path_segments, remote_archive_path, TransferReport, TransferStage};
