//! CLI argument definitions using clap
//!
//! Commands:
//! - surfsup serve [--config <path>] [--database <path>] [--host <host>] [--port <port>]
//! - surfsup check [--config <path>] [--database <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// SurfsUp - read-only JSON API over historical climate observations
#[derive(Parser, Debug)]
#[command(name = "surfsup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where to find the dataset
#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite dataset, overrides `database_path` in the config
    #[arg(long)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the dataset and serve the HTTP API
    Serve {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Host to bind, overrides the config
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides the config
        #[arg(long)]
        port: Option<u16>,
    },

    /// Verify the dataset schema, print a summary and exit
    Check {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
