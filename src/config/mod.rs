//! Configuration module for promstack
//!
//! Loading happens in three steps, each producing a new value:
//! 1. Parse the primary and secrets documents (`ConfigDocument`, `SecretsDocument`)
//! 2. Merge credentials by exact ip (`ConfigDocument::with_credentials`)
//! 3. Validate into the strict `Configuration`

mod document;
mod loader;
mod types;
mod validate;

pub use document::{
    ConfigDocument, CredentialEntry, Credentials, DeploymentModeDocument, FileTransferDocument,
    HttpProxyDocument, OneOrMany, PrometheusCredentials, PrometheusServersDocument,
    SecretsDocument, ServerEntry, TargetServersDocument,
};
pub use loader::{
    load, load_with_warnings, parse_document, parse_secrets, resolve_secrets_path, ConfigWarning,
};
pub use types::{Configuration, FileTransfer, TargetServers, DEFAULT_PACKAGE_SOURCE_ROOT};
pub use validate::{topology_mode, validate, REQUIRED_KEYS};
