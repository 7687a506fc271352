//! Configuration System
//!
//! Layered configuration: defaults, then an optional TOML file, then
//! `SIDEMARK`-prefixed environment overrides, validated before use.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SidemarkConfig {
    /// Highlight behavior
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Highlight behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Add the `collapsed` marker to a folder's container when the folder
    /// leaves the active chain.
    #[serde(default = "default_true")]
    pub collapse_on_deactivate: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            collapse_on_deactivate: default_true(),
        }
    }
}

impl SidemarkConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate().map_err(ConfigError::Invalid)
    }
}

/// Loads configuration from layered sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
}

impl ConfigLoader {
    /// A loader reading the default config path (when it exists) plus
    /// environment overrides.
    pub fn new() -> Self {
        Self {
            file: default_config_path(),
        }
    }

    /// A loader reading a specific config file plus environment overrides.
    /// The file is optional; a missing file yields defaults.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
        }
    }

    pub fn load(&self) -> Result<SidemarkConfig, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = &self.file {
            builder = builder.add_source(config::File::from(path.as_path()).required(false));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix("SIDEMARK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: SidemarkConfig = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }
}

/// Default config file location under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "sidemark")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Write the default configuration to `path`, creating parent directories.
/// Refuses to overwrite an existing file.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::Invalid(format!(
            "config file already exists: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let rendered = toml::to_string_pretty(&SidemarkConfig::default())?;
    std::fs::write(path, rendered)?;
    Ok(())
}
