//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

use super::duration::DurationError;

/// Configuration loading or validation error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Decode(#[from] DecodeError),
    #[error("host invalid: {0:?} is not an IP address")]
    InvalidHost(String),
    #[error("port invalid: {0} is outside 1..=65535")]
    InvalidPort(i64),
    #[error("{field} invalid: {source}")]
    InvalidDuration {
        field: &'static str,
        #[source]
        source: DurationError,
    },
}

/// Document decoding error, one variant per supported format.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
