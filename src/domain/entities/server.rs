//! ServerDescriptor entity - a host address plus SSH-style credentials

use std::borrow::Cow;

use serde::Serialize;

/// Role of a metrics host inside the Prometheus cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerRole {
    Master,
    Slave,
}

impl ServerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerRole::Master => "master",
            ServerRole::Slave => "slave",
        }
    }

    /// Inventory group holding hosts of this role
    pub fn group(&self) -> &'static str {
        match self {
            ServerRole::Master => "prometheus_master",
            ServerRole::Slave => "prometheus_slave",
        }
    }
}

/// A fully validated host descriptor
///
/// `Debug` is implemented by hand so passwords never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerDescriptor {
    pub ip: String,
    pub ssh_user: String,
    pub ssh_password: String,
}

impl ServerDescriptor {
    pub fn new(
        ip: impl Into<String>,
        ssh_user: impl Into<String>,
        ssh_password: impl Into<String>,
    ) -> Self {
        Self {
            ip: ip.into(),
            ssh_user: ssh_user.into(),
            ssh_password: ssh_password.into(),
        }
    }

    /// Render this host as one inventory line
    pub fn inventory_line(&self, role: Option<ServerRole>) -> String {
        let mut line = format!(
            "{} ansible_ssh_user={} ansible_ssh_pass={}",
            self.ip,
            inventory_value(&self.ssh_user),
            inventory_value(&self.ssh_password)
        );
        if let Some(role) = role {
            line.push_str(" prometheus_role=");
            line.push_str(role.as_str());
        }
        line
    }
}

/// Quote a host variable value so the inventory parser reads it back intact
///
/// Inventory lines are split shell-style, so whitespace, quotes, backslashes
/// and comment markers need double quotes with `\` and `"` escaped.
fn inventory_value(value: &str) -> Cow<'_, str> {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '#' | ';' | '"' | '\'' | '\\'));
    if !needs_quotes {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

impl std::fmt::Debug for ServerDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerDescriptor")
            .field("ip", &self.ip)
            .field("ssh_user", &self.ssh_user)
            .field("ssh_password", &"<redacted>")
            .finish()
    }
}
