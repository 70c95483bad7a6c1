//! Artifact preparation
//!
//! Makes sure each package archive is present locally before transfer,
//! downloading it when missing (or when overwrite is requested) and a URL is
//! configured.

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::domain::entities::PackageInfo;
use crate::domain::ports::{ArtifactFetcher, FetchRequest};
use crate::domain::value_objects::{PackageMap, ProxySettings};
use crate::error::PromstackResult;

pub struct ArtifactPreparer<F: ArtifactFetcher> {
    fetcher: F,
}

impl<F: ArtifactFetcher> ArtifactPreparer<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Prepare all three packages in canonical order
    ///
    /// A package with no local file and no URL only produces a warning; the
    /// missing file surfaces later when it is transferred. Fetch failures
    /// abort immediately.
    pub fn prepare(
        &self,
        packages: &PackageMap<PathBuf>,
        remote_packages: &PackageMap<Option<String>>,
        proxy: &ProxySettings,
        overwrite: bool,
    ) -> PromstackResult<Vec<PackageInfo>> {
        let mut prepared = Vec::with_capacity(3);

        for (kind, local_path) in packages.iter() {
            let remote_url = remote_packages.get(kind).clone();
            let exists = local_path.exists();

            if exists && !overwrite {
                info!(
                    package = kind.name(),
                    path = %local_path.display(),
                    "package already present, skipping download"
                );
            } else if let Some(url) = remote_url.as_deref() {
                info!(package = kind.name(), url, "downloading package");
                let request = FetchRequest {
                    url,
                    destination: local_path,
                    proxy,
                };
                if let Err(e) = self.fetcher.fetch(&request) {
                    error!(package = kind.name(), url, "download failed: {}", e);
                    return Err(e);
                }
                info!(package = kind.name(), path = %local_path.display(), "download complete");
            } else if exists {
                warn!(
                    package = kind.name(),
                    "no remote URL configured, keeping existing local file"
                );
            } else {
                warn!(
                    package = kind.name(),
                    path = %local_path.display(),
                    "no remote URL configured and no local file"
                );
            }

            prepared.push(PackageInfo::new(kind, local_path.clone(), remote_url));
        }

        Ok(prepared)
    }
}
