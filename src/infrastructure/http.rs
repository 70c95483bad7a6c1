//! HTTP artifact fetcher
//!
//! Blocking `reqwest` client with a fixed 30 second timeout. The body is
//! streamed to `<destination>.part` and renamed into place once complete, so
//! an interrupted download never leaves a truncated archive at the final path.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::domain::ports::{ArtifactFetcher, FetchRequest};
use crate::domain::value_objects::ProxySettings;
use crate::error::{PromstackError, PromstackResult};

pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }

    fn client(&self, proxy: &ProxySettings) -> PromstackResult<Client> {
        let mut builder = Client::builder().timeout(DOWNLOAD_TIMEOUT);

        if let Some(url) = proxy.url() {
            info!(proxy = %url, "using HTTP proxy");
            let proxy = reqwest::Proxy::all(&url)
                .map_err(|e| PromstackError::transfer(format!("invalid proxy {}: {}", url, e)))?;
            builder = builder.proxy(proxy);
        }

        if !proxy.verify_ssl {
            warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder
            .build()
            .map_err(|e| PromstackError::transfer(format!("cannot build HTTP client: {}", e)))
    }
}

impl ArtifactFetcher for HttpFetcher {
    fn fetch(&self, request: &FetchRequest<'_>) -> PromstackResult<()> {
        let client = self.client(request.proxy)?;

        if let Some(parent) = request.destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        debug!(url = request.url, "GET");
        let mut response = client
            .get(request.url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| PromstackError::transfer(format!("GET {}: {}", request.url, e)))?;

        let partial = partial_path(request.destination);
        let mut file = File::create(&partial)?;
        let copied = response.copy_to(&mut file).map_err(|e| {
            let _ = fs::remove_file(&partial);
            PromstackError::transfer(format!("GET {}: {}", request.url, e))
        })?;
        drop(file);

        fs::rename(&partial, request.destination)?;
        debug!(
            path = %request.destination.display(),
            bytes = copied,
            "download written"
        );
        Ok(())
    }
}

fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_path_appends_suffix() {
        assert_eq!(
            partial_path(Path::new("pkgs/grafana.tar.gz")),
            PathBuf::from("pkgs/grafana.tar.gz.part")
        );
    }

    #[test]
    fn client_builds_with_proxy_and_insecure_tls() {
        let proxy = ProxySettings {
            host: Some("127.0.0.1".to_string()),
            port: Some("3128".to_string()),
            verify_ssl: false,
        };
        assert!(HttpFetcher::new().client(&proxy).is_ok());
    }

    #[test]
    fn unreachable_host_is_transfer_error() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("nested/prometheus.tar.gz");
        let proxy = ProxySettings::default();
        let request = FetchRequest {
            url: "http://127.0.0.1:9/prometheus.tar.gz",
            destination: &destination,
            proxy: &proxy,
        };

        let err = HttpFetcher::new().fetch(&request).unwrap_err();
        assert!(matches!(err, PromstackError::Transfer(_)), "{:?}", err);
        assert!(dir.path().join("nested").is_dir());
        assert!(!destination.exists());
    }
}
