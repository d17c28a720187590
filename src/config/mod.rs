//! Configuration for the order desk.
//!
//! Loaded from a TOML file; every section is optional and falls back to
//! defaults (file storage under `./data`, a 32-slot actor channel).
//!
//! ```toml
//! [storage]
//! backend = "file"
//! path = "data"
//!
//! [actor]
//! buffer_size = 32
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML or does not match the expected shape.
    #[error("Configuration error: {0}")]
    Parse(String),
    /// The values parsed but are not usable.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the order snapshot is persisted.
    pub storage: StorageConfig,
    /// Store actor tuning.
    pub actor: ActorConfig,
}

/// Storage backend selection. `backend` defaults to `"file"` when omitted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "backend", rename_all = "lowercase", from = "StorageSection")]
pub enum StorageConfig {
    /// Keep the snapshot in memory only.
    Memory,
    /// Persist the snapshot as JSON files under `path`.
    File { path: PathBuf },
}

/// The `[storage]` table as written, before the backend is resolved.
#[derive(Deserialize)]
struct StorageSection {
    #[serde(default)]
    backend: Backend,
    path: Option<PathBuf>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "lowercase")]
enum Backend {
    #[default]
    File,
    Memory,
}

impl From<StorageSection> for StorageConfig {
    fn from(section: StorageSection) -> Self {
        match section.backend {
            Backend::Memory => StorageConfig::Memory,
            Backend::File => StorageConfig::File {
                path: section.path.unwrap_or_else(default_data_dir),
            },
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::File {
            path: default_data_dir(),
        }
    }
}

/// Store actor settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Capacity of the request channel. Callers wait when it is full.
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl AppConfig {
    /// Loads and validates configuration from a TOML file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path.as_ref()).await?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.actor.buffer_size == 0 {
            return Err(ConfigError::Validation(
                "actor.buffer_size must be greater than 0".into(),
            ));
        }
        if let StorageConfig::File { path } = &self.storage {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(
                    "storage.path cannot be empty for the file backend".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.actor.buffer_size, 32);
        assert_eq!(
            config.storage,
            StorageConfig::File {
                path: PathBuf::from("data")
            }
        );
    }

    #[test]
    fn test_parse_memory_backend() {
        let config = AppConfig::from_toml_str(
            r#"
            [storage]
            backend = "memory"

            [actor]
            buffer_size = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.storage, StorageConfig::Memory);
        assert_eq!(config.actor.buffer_size, 4);
    }

    #[test]
    fn test_parse_file_backend() {
        let config = AppConfig::from_toml_str(
            r#"
            [storage]
            backend = "file"
            path = "/var/lib/orders"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.storage,
            StorageConfig::File {
                path: PathBuf::from("/var/lib/orders")
            }
        );
    }

    #[test]
    fn test_file_backend_path_defaults() {
        let config = AppConfig::from_toml_str("[storage]\nbackend = \"file\"\n").unwrap();
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_storage_path_without_backend_uses_file() {
        let config = AppConfig::from_toml_str("[storage]\npath = \"/srv/orders\"\n").unwrap();
        assert_eq!(
            config.storage,
            StorageConfig::File {
                path: PathBuf::from("/srv/orders")
            }
        );
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        let result = AppConfig::from_toml_str("[actor]\nbuffer_size = 0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_unknown_backend_is_a_parse_error() {
        let result = AppConfig::from_toml_str("[storage]\nbackend = \"redis\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[tokio::test]
    async fn test_from_file_missing_is_io_error() {
        let result = AppConfig::from_file("/definitely/not/here.toml").await;
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
