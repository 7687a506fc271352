//! Structured logging via the `tracing` stack.
//!
//! Developer diagnostics only: log output is not part of the component's
//! observable behavior. The `SIDEMARK_LOG` environment variable overrides
//! the configured filter entirely.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: text, json
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (when output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Colored output (text format on stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific level directives, e.g. `sidemark::highlight = trace`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("sidemark.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
            other => return Err(format!("invalid log level: {other}")),
        }
        if self.format != "text" && self.format != "json" {
            return Err(format!(
                "invalid log format: {} (must be 'text' or 'json')",
                self.format
            ));
        }
        if !matches!(self.output.as_str(), "stdout" | "stderr" | "file") {
            return Err(format!(
                "invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
                self.output
            ));
        }
        Ok(())
    }
}

/// Install the global subscriber from `config`.
///
/// Filter priority: `SIDEMARK_LOG` environment variable, then the configured
/// level plus module directives. Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    config.validate().map_err(ConfigError::Invalid)?;

    let filter = build_env_filter(config)?;
    let writer = make_writer(config)?;
    let base = Registry::default().with(filter);

    // ANSI color only makes sense for terminal destinations
    let ansi = config.color && config.output != "file";

    let result = if config.format == "json" {
        base.with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(writer),
        )
        .try_init()
    } else {
        base.with(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .try_init()
    };

    result.map_err(|e| ConfigError::Invalid(format!("failed to install subscriber: {e}")))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env("SIDEMARK_LOG") {
        return Ok(filter);
    }

    let mut filter = EnvFilter::new(&config.level);
    for (module, level) in &config.modules {
        let directive = format!("{module}={level}");
        filter = filter.add_directive(directive.parse().map_err(|e| {
            ConfigError::Invalid(format!("invalid log directive '{directive}': {e}"))
        })?);
    }
    Ok(filter)
}

fn make_writer(config: &LoggingConfig) -> Result<BoxMakeWriter, ConfigError> {
    match config.output.as_str() {
        "stdout" => Ok(BoxMakeWriter::new(std::io::stdout)),
        "stderr" => Ok(BoxMakeWriter::new(std::io::stderr)),
        _ => {
            if let Some(parent) = config.file.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.file)?;
            Ok(BoxMakeWriter::new(Arc::new(file)))
        }
    }
}
