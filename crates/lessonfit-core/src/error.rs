//! Core error types for lessonfit-core.
//!
//! The deterministic engine (parser, budget, schedule, plan fitting) never
//! fails. Errors only come from the outer surfaces: configuration on disk and
//! the remote advisory oracle.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lessonfit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Remote oracle errors that the caller has to handle itself
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not determine or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Failures of the advisory oracle.
///
/// Every variant is recoverable: the advisory planner answers with the
/// deterministic result instead.
#[derive(Error, Debug)]
pub enum OracleError {
    /// The oracle is switched off in configuration or no client was given
    #[error("oracle disabled")]
    Disabled,

    /// Base URL could not be parsed or joined with an endpoint path
    #[error("invalid oracle URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network failure, including the transport's own timeout
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("oracle returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The payload carried an explicit `error` field
    #[error("oracle reported an error: {0}")]
    Remote(String),

    /// The payload was missing data or had the wrong shape
    #[error("malformed oracle response: {0}")]
    Malformed(String),

    /// The suggested constraint broke a duration invariant
    #[error("oracle constraint rejected: {0}")]
    InvalidConstraint(#[from] ConstraintError),
}

/// Broken `DurationConstraint` invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintError {
    #[error("totalDays must be >= 1")]
    NoDays,

    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("practiceHours must be >= 0, got {0}")]
    NegativePractice(f64),

    /// An hours constraint must be one day with every hour on it
    #[error("hours constraint must span one day with all hours on it")]
    IntensiveSpan,
}

impl OracleError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OracleError::Disabled => "disabled",
            OracleError::InvalidUrl(_) => "invalid_url",
            OracleError::Transport(_) => "transport",
            OracleError::Status { .. } => "status",
            OracleError::Remote(_) => "remote",
            OracleError::Malformed(_) => "malformed",
            OracleError::InvalidConstraint(_) => "invalid_constraint",
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_error_converts_into_core_error() {
        let err: CoreError = OracleError::Remote("quota exceeded".into()).into();
        assert!(matches!(err, CoreError::Oracle(OracleError::Remote(_))));
        assert_eq!(
            err.to_string(),
            "Oracle error: oracle reported an error: quota exceeded"
        );
    }

    #[test]
    fn status_error_mentions_code() {
        let err = OracleError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(err.kind(), "status");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn constraint_error_converts_into_oracle_error() {
        let err: OracleError = ConstraintError::NonPositive {
            field: "studyHours",
            value: 0.0,
        }
        .into();
        assert_eq!(err.kind(), "invalid_constraint");
        assert_eq!(
            err.to_string(),
            "oracle constraint rejected: studyHours must be > 0, got 0"
        );
    }
}
