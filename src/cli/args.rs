//! CLI argument definitions using clap
//!
//! data-api <SERVICE_NAME> [--config <path>] [--host <host>] [--port <port>]
//!          [--log-level <directive>] [--log-format json|pretty]

use clap::Parser;
use std::path::PathBuf;

use crate::observability::LogFormat;

/// data-api - A small keyed-record store served over HTTP
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "data-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Service name reported by /info and in every log line
    pub name: String,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides the config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// Log filter directive, e.g. "info" or "data_api=debug"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log line format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only() {
        let cli = Cli::try_parse_from(["data-api", "records"]).unwrap();
        assert_eq!(cli.name, "records");
        assert!(cli.config.is_none());
        assert!(cli.port.is_none());
    }

    #[test]
    fn test_name_is_required() {
        assert!(Cli::try_parse_from(["data-api"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "data-api",
            "records",
            "--config",
            "/etc/data-api.json",
            "--port",
            "9000",
            "--log-format",
            "pretty",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/data-api.json")));
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.log_format, Some(LogFormat::Pretty));
    }

    #[test]
    fn test_invalid_port() {
        assert!(Cli::try_parse_from(["data-api", "records", "--port", "http"]).is_err());
    }
}
