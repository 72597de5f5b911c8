//! Reading config documents from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::error::{ConfigError, DecodeError};
use super::settings::Settings;

/// Serialization format of a config document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension; anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

impl Settings {
    /// Load settings from a document at the given path.
    ///
    /// The result is not validated; see [`Settings::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| ConfigError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let format = DocumentFormat::from_path(path);
        debug!(path = %path.display(), ?format, bytes = content.len(), "Decoding config document");

        Self::from_slice(&content, format)
    }

    /// Decode document bytes onto the default settings.
    ///
    /// JSON input is read up to the end of its first value; anything after
    /// it is ignored.
    pub fn from_slice(bytes: &[u8], format: DocumentFormat) -> Result<Self, ConfigError> {
        let settings = match format {
            DocumentFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_slice(bytes);
                Settings::deserialize(&mut deserializer).map_err(DecodeError::from)?
            }
            DocumentFormat::Yaml => serde_yaml::from_slice(bytes).map_err(DecodeError::from)?,
        };
        Ok(settings)
    }
}
