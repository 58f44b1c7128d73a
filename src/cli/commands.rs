//! CLI command implementations
//!
//! Both commands share the boot sequence: load config, open the dataset,
//! verify its schema. `serve` then hands the dataset to the HTTP server;
//! `check` prints a summary and exits.

use std::io::{self, Write};

use serde::Serialize;

use super::args::{Command, DatasetArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::dataset::{Dataset, DatasetSummary, QueryPolicy};
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            dataset,
            host,
            port,
        } => serve(&dataset, host, port),
        Command::Check { dataset } => check(&dataset),
    }
}

/// Load config and open the dataset.
///
/// A missing file or schema mismatch is fatal here, before any listener is
/// bound.
fn boot(args: &DatasetArgs) -> CliResult<(Config, Dataset)> {
    log_event(Event::BootStart);

    let config = Config::resolve(args)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("database_path", &config.database_path)],
    );

    let dataset = match Dataset::open(config.database(), config.policy.clone()) {
        Ok(dataset) => dataset,
        Err(e) => {
            let reason = e.to_string();
            log_event_with_fields(Event::BootFailed, &[("code", e.code()), ("error", &reason)]);
            return Err(CliError::from(e));
        }
    };
    log_event_with_fields(
        Event::SchemaVerified,
        &[("database_path", &config.database_path)],
    );

    Ok((config, dataset))
}

/// Open the dataset and serve the HTTP API until interrupted
pub fn serve(args: &DatasetArgs, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let (mut config, dataset) = boot(args)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let server = HttpServer::new(config.server, dataset);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Output of `surfsup check`
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub database_path: String,
    #[serde(flatten)]
    pub summary: DatasetSummary,
    pub policy: QueryPolicy,
}

/// Verify the dataset and print a JSON summary to stdout
pub fn check(args: &DatasetArgs) -> CliResult<()> {
    let (config, dataset) = boot(args)?;

    let report = CheckReport {
        database_path: config.database_path,
        summary: dataset.summary()?,
        policy: config.policy,
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}
