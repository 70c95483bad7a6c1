//! Configuration loading
//!
//! Reads the primary document and the secrets document it references, merges
//! credentials and validates the result. Unknown keys never fail a load; they
//! are collected as warnings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_yaml_ng::Value;
use tracing::{debug, warn};

use crate::error::{PromstackError, PromstackResult};

use super::document::{ConfigDocument, SecretsDocument};
use super::types::Configuration;
use super::validate::validate;

/// Non-fatal configuration warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load, merge and validate, logging any warnings
pub fn load(path: &Path) -> PromstackResult<Configuration> {
    let (config, warnings) = load_with_warnings(path)?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok(config)
}

/// Load, merge and validate, returning warnings to the caller
pub fn load_with_warnings(path: &Path) -> PromstackResult<(Configuration, Vec<ConfigWarning>)> {
    let content = read_existing(path)?;
    let (document, mut warnings) = parse_document(&content, path)?;

    let secrets_file = document.server_secrets_file.as_ref().ok_or_else(|| {
        PromstackError::validation("missing required key 'server_secrets_file'")
    })?;
    let secrets_path = resolve_secrets_path(path, secrets_file);
    debug!(path = %secrets_path.display(), "loading secrets");

    let secrets_content = read_existing(&secrets_path)?;
    let (secrets, secrets_warnings) = parse_secrets(&secrets_content, &secrets_path)?;
    warnings.extend(secrets_warnings);

    let merged = document.with_credentials(&secrets.server_credentials);
    let config = validate(&merged)?;
    Ok((config, warnings))
}

/// Parse the primary document without touching the filesystem
///
/// A YAML syntax error is a `Parse` error. A well-formed document whose
/// sections have the wrong shape is a `Validation` error.
pub fn parse_document(
    content: &str,
    file: &Path,
) -> PromstackResult<(ConfigDocument, Vec<ConfigWarning>)> {
    let value = parse_value(content, file)?;
    deserialize_lenient(value, content, file, PromstackError::Validation)
}

/// Parse the secrets document; shape errors are reported as `Parse`
pub fn parse_secrets(
    content: &str,
    file: &Path,
) -> PromstackResult<(SecretsDocument, Vec<ConfigWarning>)> {
    let value = parse_value(content, file)?;
    deserialize_lenient(value, content, file, |message| PromstackError::Parse {
        file: file.to_path_buf(),
        message,
    })
}

/// The secrets path is relative to the directory holding the primary document
pub fn resolve_secrets_path(config_path: &Path, secrets_file: &Path) -> PathBuf {
    match config_path.parent() {
        Some(dir) => dir.join(secrets_file),
        None => secrets_file.to_path_buf(),
    }
}

fn read_existing(path: &Path) -> PromstackResult<String> {
    if !path.exists() {
        return Err(PromstackError::NotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn parse_value(content: &str, file: &Path) -> PromstackResult<Value> {
    serde_yaml_ng::from_str(content).map_err(|e| PromstackError::Parse {
        file: file.to_path_buf(),
        message: e.to_string(),
    })
}

fn deserialize_lenient<T>(
    value: Value,
    content: &str,
    file: &Path,
    on_error: impl FnOnce(String) -> PromstackError,
) -> PromstackResult<(T, Vec<ConfigWarning>)>
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok((T::default(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let document: T = serde_ignored::deserialize(value, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| on_error(e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: file.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((document, warnings))
}

/// First line defining `needle` as a key, list items included
fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            let line = line.strip_prefix("- ").unwrap_or(line).trim_start();
            line.strip_prefix(needle)
                .is_some_and(|rest| rest.trim_start().starts_with(':'))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deployment_base_dir",
        "server_secrets_file",
        "packages",
        "remote_packages",
        "target_servers",
        "prometheus_servers",
        "master",
        "slave",
        "node_exporter_servers",
        "grafana_servers",
        "prometheus_config",
        "grafana_config",
        "prometheus_deployment",
        "cluster_mode",
        "file_transfer",
        "source_server",
        "remote_path",
        "ip",
        "ssh_user",
        "ssh_password",
        "http_proxy",
        "host",
        "port",
        "verify_ssl",
        "overwrite",
        "package_source_root",
        "extracted_dirs",
        "server_credentials",
        "prometheus",
        "node_exporter",
        "grafana",
        "source",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
