//! Raw configuration documents
//!
//! These types mirror the YAML files as written: every section is optional so
//! that a missing key becomes a validation error naming that key rather than
//! an opaque deserialization failure. Descriptor groups accept either a bare
//! mapping or a list and are normalized to a list here, once.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::{self, value::MapAccessDeserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_yaml_ng::Value;

/// A bare item or a list of items, always stored as a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOrMany<T>(pub Vec<T>);

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

struct OneOrManyVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrManyVisitor<T> {
    type Value = OneOrMany<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping or a list of mappings")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OneOrMany::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OneOrMany::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(|item| OneOrMany(vec![item]))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(OneOrMany(items))
    }
}

// Items are read straight from the deserializer, never buffered, so field
// errors keep their message and unknown keys still reach `serde_ignored`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OneOrManyVisitor(PhantomData))
    }
}

/// A server descriptor before validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ServerEntry {
    #[serde(default, deserialize_with = "ip_field")]
    pub ip: Option<String>,
    #[serde(default, deserialize_with = "ssh_user_field")]
    pub ssh_user: Option<String>,
    #[serde(default, deserialize_with = "ssh_password_field")]
    pub ssh_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PrometheusServersDocument {
    #[serde(default)]
    pub master: OneOrMany<ServerEntry>,
    #[serde(default)]
    pub slave: OneOrMany<ServerEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TargetServersDocument {
    #[serde(default, deserialize_with = "nullable")]
    pub prometheus_servers: PrometheusServersDocument,
    #[serde(default)]
    pub node_exporter_servers: OneOrMany<ServerEntry>,
    #[serde(default)]
    pub grafana_servers: OneOrMany<ServerEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeploymentModeDocument {
    /// Kept untyped so that strings and floats fail validation, not parsing
    #[serde(default)]
    pub cluster_mode: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FileTransferDocument {
    #[serde(default)]
    pub source_server: Option<ServerEntry>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub remote_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct HttpProxyDocument {
    #[serde(default, deserialize_with = "scalar_string")]
    pub host: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub port: Option<String>,
    #[serde(default)]
    pub verify_ssl: Option<bool>,
}

/// The primary configuration document as written
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ConfigDocument {
    pub deployment_base_dir: Option<PathBuf>,
    pub server_secrets_file: Option<PathBuf>,
    pub packages: Option<BTreeMap<String, Option<PathBuf>>>,
    pub remote_packages: Option<BTreeMap<String, Option<String>>>,
    pub target_servers: Option<TargetServersDocument>,
    pub prometheus_config: Option<Value>,
    pub grafana_config: Option<Value>,
    pub prometheus_deployment: Option<DeploymentModeDocument>,
    pub file_transfer: Option<FileTransferDocument>,
    pub http_proxy: Option<HttpProxyDocument>,
    pub overwrite: Option<Value>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub package_source_root: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub extracted_dirs: BTreeMap<String, String>,
}

/// One `{ip, ssh_password}` pair from the secrets document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialEntry {
    #[serde(deserialize_with = "required_scalar")]
    pub ip: String,
    #[serde(deserialize_with = "required_scalar")]
    pub ssh_password: String,
}

impl CredentialEntry {
    pub fn new(ip: impl Into<String>, ssh_password: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ssh_password: ssh_password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PrometheusCredentials {
    #[serde(default)]
    pub master: OneOrMany<CredentialEntry>,
    #[serde(default)]
    pub slave: OneOrMany<CredentialEntry>,
}

/// Credentials keyed by role
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Credentials {
    #[serde(default, deserialize_with = "nullable")]
    pub prometheus: PrometheusCredentials,
    #[serde(default)]
    pub node_exporter: OneOrMany<CredentialEntry>,
    #[serde(default)]
    pub grafana: OneOrMany<CredentialEntry>,
    #[serde(default)]
    pub source: OneOrMany<CredentialEntry>,
}

/// The secrets document as written
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SecretsDocument {
    #[serde(default, deserialize_with = "nullable")]
    pub server_credentials: Credentials,
}

impl ConfigDocument {
    /// Copy of this document with passwords from `credentials` merged in
    ///
    /// A credential applies to every descriptor in its role's group whose ip
    /// is exactly equal. Unmatched credentials are ignored and unmatched
    /// descriptors keep whatever password they already had.
    pub fn with_credentials(&self, credentials: &Credentials) -> ConfigDocument {
        let mut merged = self.clone();

        if let Some(targets) = merged.target_servers.as_mut() {
            apply_credentials(
                &mut targets.prometheus_servers.master.0,
                credentials.prometheus.master.as_slice(),
            );
            apply_credentials(
                &mut targets.prometheus_servers.slave.0,
                credentials.prometheus.slave.as_slice(),
            );
            apply_credentials(
                &mut targets.node_exporter_servers.0,
                credentials.node_exporter.as_slice(),
            );
            apply_credentials(
                &mut targets.grafana_servers.0,
                credentials.grafana.as_slice(),
            );
        }

        if let Some(source) = merged
            .file_transfer
            .as_mut()
            .and_then(|transfer| transfer.source_server.as_mut())
        {
            apply_credentials(std::slice::from_mut(source), credentials.source.as_slice());
        }

        merged
    }
}

fn apply_credentials(targets: &mut [ServerEntry], credentials: &[CredentialEntry]) {
    for credential in credentials {
        for target in targets
            .iter_mut()
            .filter(|target| target.ip.as_deref() == Some(credential.ip.as_str()))
        {
            target.ssh_password = Some(credential.ssh_password.clone());
        }
    }
}

/// Accept strings, numbers and booleans wherever text is expected
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    named_scalar(deserializer, None)
}

fn ip_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    named_scalar(deserializer, Some("ip"))
}

fn ssh_user_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    named_scalar(deserializer, Some("ssh_user"))
}

fn ssh_password_field<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    named_scalar(deserializer, Some("ssh_password"))
}

fn named_scalar<'de, D>(deserializer: D, field: Option<&str>) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => {
            let found = match other {
                Value::Sequence(_) => "a list",
                Value::Mapping(_) => "a mapping",
                _ => "a tagged value",
            };
            Err(de::Error::custom(match field {
                Some(field) => format!(
                    "{} must be a string, number or boolean, found {}",
                    field, found
                ),
                None => format!("expected a string, number or boolean, found {}", found),
            }))
        }
    }
}

fn required_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_string(deserializer)?
        .ok_or_else(|| de::Error::custom("expected a value, found null"))
}

/// Treat an explicit `null` section like an absent one
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
