//! CLI command implementations
//!
//! Startup sequence:
//! 1. Configuration load (file, then flag overrides)
//! 2. Service identity
//! 3. Logger installation
//! 4. Runtime and HTTP server start

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{self, Event, LogConfig};
use crate::record::RecordStore;
use crate::service::{self, ServiceInfo};

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listener and CORS settings
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Apply command line overrides on top of file values
    pub fn with_overrides(mut self, cli: &Cli) -> CliResult<Self> {
        if let Some(host) = &cli.host {
            self.http.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.http.port = port;
        }
        if let Some(level) = &cli.log_level {
            self.log.level = level.clone();
        }
        if let Some(format) = cli.log_format {
            self.log.format = format;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        self.log.configured_filter()?;

        Ok(())
    }
}

/// Main CLI entry point
///
/// Parses arguments and runs the service.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    serve(&cli)
}

/// Resolve the effective configuration for `cli`
pub fn resolve_config(cli: &Cli) -> CliResult<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.with_overrides(cli)
}

/// Start the service and block until it shuts down
pub fn serve(cli: &Cli) -> CliResult<()> {
    let config = resolve_config(cli)?;
    let service_info = ServiceInfo::new(cli.name.clone());

    observability::init(&config.log)?;

    let args: Vec<String> = std::env::args().collect();
    info!(
        event = %Event::Init,
        service = %service_info.name(),
        instance_id = %service_info.instance_id(),
        hostname = %service::hostname(),
        args = ?args,
        "Service started successfully."
    );

    let store = Arc::new(RecordStore::new());
    let server = HttpServer::new(config.http, service_info, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}
