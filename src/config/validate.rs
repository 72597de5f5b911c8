//! Validation of raw settings into a resolved `Config`.

use std::net::IpAddr;
use std::time::Duration;

use tracing::warn;

use super::Config;
use super::duration::{format_duration, parse_duration};
use super::error::ConfigError;
use super::settings::Settings;

/// Lowest accepted session expiry; shorter values are raised to it.
pub const MIN_EXPIRED_DURATION: Duration = Duration::from_secs(15);

impl Settings {
    /// Validate the settings and compute the derived durations.
    ///
    /// Checks run in order and the first failure is returned. Out-of-range
    /// durations are corrected instead of rejected: expiry is raised to
    /// [`MIN_EXPIRED_DURATION`], and a keep-alive that is zero or not shorter
    /// than the expiry becomes half the expiry.
    pub fn validate(&self) -> Result<Config, ConfigError> {
        let host: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;

        let port = u16::try_from(self.port)
            .ok()
            .filter(|port| *port != 0)
            .ok_or(ConfigError::InvalidPort(self.port))?;

        let expired_duration = resolve_expired(&self.expired_duration)?;
        let keepalive_duration = resolve_keepalive(&self.keepalive_duration, expired_duration)?;

        Ok(Config {
            host,
            port,
            expired_duration_raw: self.expired_duration.clone(),
            expired_duration,
            keepalive_duration_raw: self.keepalive_duration.clone(),
            keepalive_duration,
            auth_credentials: self.auth_cfg.clone(),
        })
    }
}

fn resolve_expired(raw: &str) -> Result<Duration, ConfigError> {
    let parsed = parse_field("expired_duration", raw)?;
    if parsed >= MIN_EXPIRED_DURATION {
        return Ok(parsed);
    }

    warn!(
        raw = %raw,
        effective = %format_duration(MIN_EXPIRED_DURATION),
        "expired_duration below minimum, raising it"
    );
    Ok(MIN_EXPIRED_DURATION)
}

fn resolve_keepalive(raw: &str, expired: Duration) -> Result<Duration, ConfigError> {
    let parsed = parse_field("keepalive_duration", raw)?;
    if !parsed.is_zero() && parsed < expired {
        return Ok(parsed);
    }

    let fallback = expired / 2;
    warn!(
        raw = %raw,
        effective = %format_duration(fallback),
        "keepalive_duration must be positive and shorter than expired_duration, using half of it"
    );
    Ok(fallback)
}

fn parse_field(field: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    parse_duration(raw).map_err(|source| ConfigError::InvalidDuration { field, source })
}
