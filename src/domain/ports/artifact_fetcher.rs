//! ArtifactFetcher port - downloads installation archives
//!
//! Implementations stream the response body to `destination`, creating
//! parent directories as needed. Any network failure or non-2xx status is
//! reported as `PromstackError::Transfer`.

use std::path::Path;

use crate::domain::value_objects::ProxySettings;
use crate::error::PromstackResult;

/// One download
#[derive(Debug, Clone, Copy)]
pub struct FetchRequest<'a> {
    pub url: &'a str,
    pub destination: &'a Path,
    pub proxy: &'a ProxySettings,
}

pub trait ArtifactFetcher {
    fn fetch(&self, request: &FetchRequest<'_>) -> PromstackResult<()>;
}
