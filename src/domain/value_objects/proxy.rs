//! Proxy settings for artifact downloads
//!
//! Only downloads go through the proxy; remote copies and engine runs never do.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxySettings {
    pub host: Option<String>,
    pub port: Option<String>,
    pub verify_ssl: bool,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            verify_ssl: true,
        }
    }
}

impl ProxySettings {
    /// Proxy URL, present only when both host and port are configured
    pub fn url(&self) -> Option<String> {
        match (self.host.as_deref(), self.port.as_deref()) {
            (Some(host), Some(port)) if !host.is_empty() && !port.is_empty() => {
                Some(format!("http://{}:{}", host, port))
            }
            _ => None,
        }
    }
}
