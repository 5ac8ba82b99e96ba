//! Learner action configuration.
//!
//! Loaded from `~/.learner-actions/config.toml`. Defaults apply if missing.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;
use tracing::debug;

use crate::model::{LATEST_SCHEMA_VERSION, SchemaVersion};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config at {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("latest-schema-version must be at least 1 in {}, got {version}", path.display())]
    InvalidSchemaVersion { path: PathBuf, version: i64 },
}

/// The config file as written on disk, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct ConfigFile {
    latest_schema_version: i64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            latest_schema_version: LATEST_SCHEMA_VERSION.get(),
        }
    }
}

/// Learner action configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Schema version given to actions created without one.
    latest_schema_version: SchemaVersion,
}

impl Config {
    /// Creates a config with the given latest schema version.
    #[must_use]
    pub fn new(latest_schema_version: SchemaVersion) -> Self {
        Self {
            latest_schema_version,
        }
    }

    /// Load config from `~/.learner-actions/config.toml`.
    /// Returns defaults if the home directory or the file is missing.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file exists but can't be read, isn't
    /// valid TOML, or sets a schema version below 1.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let file: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        let latest_schema_version = SchemaVersion::new(file.latest_schema_version).map_err(|_| {
            ConfigError::InvalidSchemaVersion {
                path: path.to_path_buf(),
                version: file.latest_schema_version,
            }
        })?;
        let config = Self::new(latest_schema_version);

        debug!(
            path = %path.display(),
            latest_schema_version = %latest_schema_version,
            "loaded config"
        );
        Ok(config)
    }

    /// The config file path: `~/.learner-actions/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".learner-actions").join("config.toml"))
    }

    /// The configured latest schema version.
    #[must_use]
    pub fn latest_schema_version(&self) -> SchemaVersion {
        self.latest_schema_version
    }
}
