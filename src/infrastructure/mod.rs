//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all network and process I/O.
//!
//! ## Structure
//!
//! - `http` - Artifact downloads (`HttpFetcher`)
//! - `sftp` - Staging host transfer (`SftpConnector`)
//! - `ansible` - Automation engine (`AnsibleEngine`)

pub mod ansible;
pub mod http;
pub mod sftp;

pub use ansible::{AnsibleEngine, DEFAULT_ENGINE};
pub use http::{HttpFetcher, DOWNLOAD_TIMEOUT};
pub use sftp::{SftpConnector, SftpSession};
