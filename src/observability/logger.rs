//! Structured logger setup
//!
//! - JSON lines by default, one event per line
//! - `RUST_LOG` overrides the configured level
//! - Installed once per process

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{ObservabilityError, ObservabilityResult};

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable, for local development
    Pretty,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, default is "info"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Line format, default is JSON
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Build the level filter, preferring `RUST_LOG` when it is set
    pub fn filter(&self) -> ObservabilityResult<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => self.configured_filter(),
        }
    }

    /// Level filter from the configured directive only
    pub fn configured_filter(&self) -> ObservabilityResult<EnvFilter> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| ObservabilityError::InvalidLevel(format!("{}: {}", self.level, e)))
    }
}

/// Install the global subscriber
pub fn init(config: &LogConfig) -> ObservabilityResult<()> {
    let filter = config.filter()?;

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(false)
            .with_file(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
    };

    installed.map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}
