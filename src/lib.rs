//! promstack - provision a Prometheus, node_exporter and Grafana stack
//!
//! A run loads a YAML configuration plus a secrets document, makes sure the
//! three package archives exist locally, copies them to a staging host,
//! writes an inventory, service configs, unit files and playbooks, then
//! drives `ansible-playbook` once per role.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase};
pub use config::{load, Configuration};
pub use domain::services::{generate, DeploymentBundle, DispatchPlan, Inventory};
pub use domain::value_objects::{PackageKind, TopologyMode};
pub use error::{PromstackError, PromstackResult};
