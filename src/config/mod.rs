//! Configuration loading and validation for the service.
//!
//! A JSON or YAML document is decoded onto the built-in defaults
//! ([`Settings`]), then validated into a resolved [`Config`] holding the
//! parsed listen address and the effective session timings.

mod auth;
mod document;
mod duration;
mod error;
mod loader;
mod print;
mod settings;
mod validate;

pub use auth::{AuthCredential, AuthType, UnknownAuthType};
pub use duration::{DurationError, format_duration, parse_duration};
pub use error::{ConfigError, DecodeError};
pub use loader::DocumentFormat;
pub use settings::{
    DEFAULT_EXPIRED_DURATION, DEFAULT_HOST, DEFAULT_KEEPALIVE_DURATION, DEFAULT_PORT, Settings,
};
pub use validate::MIN_EXPIRED_DURATION;

use serde::Serialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use tracing::info;

/// Validated service configuration.
///
/// Built by [`Settings::validate`], which guarantees
/// `expired_duration >= MIN_EXPIRED_DURATION` and
/// `0 < keepalive_duration < expired_duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Listen address.
    pub host: IpAddr,
    /// Listen port, never 0.
    pub port: u16,
    /// Session expiry as written in the document.
    #[serde(rename = "expired_duration")]
    pub expired_duration_raw: String,
    /// Effective session expiry.
    #[serde(rename = "effective_expired_duration", serialize_with = "duration::serialize")]
    pub expired_duration: Duration,
    /// Keep-alive interval as written in the document.
    #[serde(rename = "keepalive_duration")]
    pub keepalive_duration_raw: String,
    /// Effective keep-alive interval.
    #[serde(rename = "effective_keepalive_duration", serialize_with = "duration::serialize")]
    pub keepalive_duration: Duration,
    /// Accepted credentials.
    #[serde(rename = "auth_cfg")]
    pub auth_credentials: Vec<AuthCredential>,
}

impl Config {
    /// Load settings from the document at `path` and validate them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Settings::load(path)?.validate()?;

        info!(
            path = %path.display(),
            listen = %config.listen_addr(),
            credentials = config.auth_credentials.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Socket address the service binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
