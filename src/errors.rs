//! Error types for factibilidad operations.
//!
//! The calculation engines never fail: malformed numbers degrade to zero and
//! empty denominators yield defined sentinels. Errors only arise at the
//! edges, when reading input, loading configuration or touching the
//! project repository.
//!
//! # Example
//!
//! ```rust
//! use factibilidad::errors::Error;
//!
//! let err = Error::project_not_found("a1b2");
//! assert_eq!(err.to_string(), "Project not found: a1b2");
//! assert!(err.is_user_fixable());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for factibilidad operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON input or repository file
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Malformed TOML configuration
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// Configuration errors
    #[error("Configuration error{}: {message}", path_suffix(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Input rejected by a validation rule
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No project with the requested id
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl Error {
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn project_not_found(id: impl Into<String>) -> Self {
        Self::ProjectNotFound(id.into())
    }

    /// Whether the user can fix the problem by changing input or config.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_mentions_path() {
        let err = Error::io_with_path(
            io::Error::new(io::ErrorKind::NotFound, "missing"),
            "/tmp/form.json",
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/form.json"), "{message}");
        assert!(message.contains("missing"), "{message}");
        assert!(!err.is_user_fixable());
    }

    #[test]
    fn config_error_without_path() {
        let err = Error::config("weights must sum to 1.0");
        assert_eq!(
            err.to_string(),
            "Configuration error: weights must sum to 1.0"
        );
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_user_fixable());
    }
}
