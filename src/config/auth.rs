//! Authentication credential configuration.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::document::{fold_key, overlay_value, skip_value};

/// How a credential's `data` is interpreted by the authentication layer.
///
/// Encoded as an integer in config documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum AuthType {
    /// Plaintext code or password.
    #[default]
    Code,
    /// Hex-encoded SM3 digest.
    Sm3Hash,
    /// Opaque token.
    Token,
}

/// Integer that does not name an `AuthType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown auth type {0} (expected 0, 1 or 2)")]
pub struct UnknownAuthType(pub i64);

impl TryFrom<i64> for AuthType {
    type Error = UnknownAuthType;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AuthType::Code),
            1 => Ok(AuthType::Sm3Hash),
            2 => Ok(AuthType::Token),
            other => Err(UnknownAuthType(other)),
        }
    }
}

impl From<AuthType> for i64 {
    fn from(value: AuthType) -> Self {
        match value {
            AuthType::Code => 0,
            AuthType::Sm3Hash => 1,
            AuthType::Token => 2,
        }
    }
}

/// A single credential accepted by the service.
///
/// Fields missing from a document element, or set to `null`, take their
/// zero value; a `null` element is an all-zero credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthCredential {
    /// Record format version, carried through unchecked.
    pub version: i64,
    /// Selects how `data` is verified.
    #[serde(rename = "type")]
    pub auth_type: AuthType,
    pub username: String,
    /// Password, digest or token depending on `auth_type`.
    pub data: String,
}

impl AuthCredential {
    /// Creates a version 0 credential.
    pub fn new(auth_type: AuthType, username: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            version: 0,
            auth_type,
            username: username.into(),
            data: data.into(),
        }
    }
}

impl<'de> Deserialize<'de> for AuthCredential {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AuthCredentialVisitor)
    }
}

struct AuthCredentialVisitor;

impl<'de> Visitor<'de> for AuthCredentialVisitor {
    type Value = AuthCredential;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an auth credential object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<AuthCredential, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut credential = AuthCredential::default();
        while let Some(key) = map.next_key::<String>()? {
            match fold_key(&key).as_str() {
                "version" => overlay_value(&mut map, &mut credential.version)?,
                "type" => overlay_value(&mut map, &mut credential.auth_type)?,
                "username" => overlay_value(&mut map, &mut credential.username)?,
                "data" => overlay_value(&mut map, &mut credential.data)?,
                _ => skip_value(&mut map)?,
            }
        }
        Ok(credential)
    }
}
