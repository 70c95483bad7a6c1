//! Error types for promstack
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! only at the very top level.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for promstack operations
pub type PromstackResult<T> = Result<T, PromstackError>;

/// Main error type for promstack operations
///
/// There is no local recovery anywhere in the pipeline: every variant is
/// logged where it is detected and then propagated to `main`, which exits
/// with status 1.
#[derive(Error, Debug)]
pub enum PromstackError {
    /// Configuration or secrets file is missing
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// A document is not well-formed YAML
    #[error("failed to parse {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// A required field is absent or malformed
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// Artifact download or remote copy failed
    #[error("transfer failed: {0}")]
    Transfer(String),

    /// The automation engine could not be spawned or exited non-zero
    #[error("command `{command}` failed (exit code {}): {stderr}", display_code(*.code))]
    Execution {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Serializing a generated document failed
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Local IO error while writing generated artifacts
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PromstackError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transfer(message: impl Into<String>) -> Self {
        Self::Transfer(message.into())
    }

    /// Pipeline stage the error belongs to, used in the final log line.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::Parse { .. } | Self::Validation(_) => "config",
            Self::Transfer(_) => "transfer",
            Self::Execution { .. } => "execution",
            Self::Yaml(_) | Self::Io(_) => "generate",
        }
    }
}

fn display_code(code: Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let err = PromstackError::validation("missing required key 'packages'");
        assert_eq!(
            err.to_string(),
            "invalid configuration: missing required key 'packages'"
        );
        assert_eq!(err.stage(), "config");
    }

    #[test]
    fn test_error_display_execution_without_code() {
        let err = PromstackError::Execution {
            command: "ansible-playbook -i hosts site.yml".to_string(),
            code: None,
            stderr: "killed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "command `ansible-playbook -i hosts site.yml` failed (exit code none): killed"
        );
        assert_eq!(err.stage(), "execution");
    }

    #[test]
    fn test_error_display_not_found() {
        let err = PromstackError::NotFound {
            path: PathBuf::from("deploy/config.yml"),
        };
        assert_eq!(err.to_string(), "file not found: deploy/config.yml");
    }
}
