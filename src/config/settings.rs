//! Raw settings as read from a config document, plus the built-in defaults.

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

use super::auth::{AuthCredential, AuthType};
use super::document::{fold_key, overlay_value, skip_value};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: i64 = 8545;
pub const DEFAULT_EXPIRED_DURATION: &str = "30s";
pub const DEFAULT_KEEPALIVE_DURATION: &str = "10s";

const DEFAULT_USERNAME: &str = "UMU";
const DEFAULT_CODE: &str = "123456";
const DEFAULT_SM3_DIGEST: &str = "207cf410532f92a47dee245ce9b11ff71f578ebd763eb3bbea44ebd043d018fb";

/// Unvalidated service settings.
///
/// Decoding overlays a document onto `Settings::default()`: fields the
/// document omits keep their default, and a present `auth_cfg` replaces the
/// default credential list as a whole (`null` clears it). A `null` scalar
/// keeps its default and a `null` document yields the defaults unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Listen address, an IPv4 or IPv6 literal.
    pub host: String,
    /// Listen port. Kept wide so out-of-range values reach validation.
    pub port: i64,
    /// Session expiry, e.g. "30s".
    pub expired_duration: String,
    /// Keep-alive interval, e.g. "10s".
    pub keepalive_duration: String,
    /// Accepted credentials, in document order.
    pub auth_cfg: Vec<AuthCredential>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            expired_duration: DEFAULT_EXPIRED_DURATION.to_string(),
            keepalive_duration: DEFAULT_KEEPALIVE_DURATION.to_string(),
            auth_cfg: vec![
                AuthCredential::new(AuthType::Code, DEFAULT_USERNAME, DEFAULT_CODE),
                AuthCredential::new(AuthType::Sm3Hash, DEFAULT_USERNAME, DEFAULT_SM3_DIGEST),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SettingsVisitor)
    }
}

struct SettingsVisitor;

impl<'de> Visitor<'de> for SettingsVisitor {
    type Value = Settings;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a settings object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Settings, E> {
        Ok(Settings::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Settings, E> {
        Ok(Settings::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Settings, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut settings = Settings::default();
        while let Some(key) = map.next_key::<String>()? {
            match fold_key(&key).as_str() {
                "host" => overlay_value(&mut map, &mut settings.host)?,
                "port" => overlay_value(&mut map, &mut settings.port)?,
                "expired_duration" => overlay_value(&mut map, &mut settings.expired_duration)?,
                "keepalive_duration" => overlay_value(&mut map, &mut settings.keepalive_duration)?,
                "auth_cfg" => {
                    let credentials: Option<Vec<Option<AuthCredential>>> = map.next_value()?;
                    settings.auth_cfg = credentials
                        .unwrap_or_default()
                        .into_iter()
                        .map(Option::unwrap_or_default)
                        .collect();
                }
                _ => skip_value(&mut map)?,
            }
        }
        Ok(settings)
    }
}
