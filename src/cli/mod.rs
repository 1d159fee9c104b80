//! CLI module
//!
//! Parses arguments, resolves configuration and runs the HTTP service.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{resolve_config, run, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
