//! Use Case Factory
//!
//! Wires the deploy use case to its network and process adapters.

use crate::application::DeployUseCase;
use crate::infrastructure::{AnsibleEngine, HttpFetcher, SftpConnector};

/// Type alias for the deploy use case with production adapters
pub type ConcreteDeployUseCase = DeployUseCase<HttpFetcher, SftpConnector, AnsibleEngine>;

/// Create a deploy use case that runs `engine` for each playbook
pub fn create_deploy_use_case(engine: &str) -> ConcreteDeployUseCase {
    DeployUseCase::new(
        HttpFetcher::new(),
        SftpConnector::new(),
        AnsibleEngine::new(engine),
    )
}
