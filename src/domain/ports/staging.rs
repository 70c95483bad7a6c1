//! Staging ports - authenticated file copy to the staging host
//!
//! A connector opens exactly one session per run; the session is reused for
//! every package and released with `close`.

use std::path::Path;

use crate::domain::entities::ServerDescriptor;
use crate::error::PromstackResult;

pub trait StagingConnector {
    type Session: StagingSession;

    fn connect(&self, server: &ServerDescriptor) -> PromstackResult<Self::Session>;
}

pub trait StagingSession {
    /// Whether a file or directory exists at `remote_path`
    fn exists(&mut self, remote_path: &str) -> PromstackResult<bool>;

    /// Create a single directory (parents must already exist)
    fn create_dir(&mut self, remote_path: &str) -> PromstackResult<()>;

    /// Copy a local file to `remote_path`, replacing any existing file
    fn upload(&mut self, local_path: &Path, remote_path: &str) -> PromstackResult<()>;

    /// Release the session
    fn close(self) -> PromstackResult<()>
    where
        Self: Sized;
}
