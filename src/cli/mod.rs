//! CLI module for SurfsUp
//!
//! Provides command-line interface for:
//! - serve: Open the dataset and serve the HTTP API
//! - check: Verify the dataset and print a summary

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, DatasetArgs};
pub use commands::{check, run, run_command, serve, CheckReport};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
