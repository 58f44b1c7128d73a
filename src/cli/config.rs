//! Service configuration
//!
//! Loaded from an optional JSON file, then overridden by CLI flags.
//!
//! ```json
//! {
//!   "database_path": "Resources/hawaii.sqlite",
//!   "host": "127.0.0.1",
//!   "port": 5000,
//!   "cors_origins": [],
//!   "precipitation_cutoff": "2016-08-24",
//!   "tobs_cutoff": "2016-08-23",
//!   "most_active_station": "USC00519281"
//! }
//! ```
//!
//! Only `database_path` is required, from the file or `--database`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::args::DatasetArgs;
use super::errors::{CliError, CliResult};
use crate::dataset::QueryPolicy;
use crate::http_server::HttpServerConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite dataset (required)
    #[serde(default)]
    pub database_path: String,

    #[serde(flatten)]
    pub server: HttpServerConfig,

    #[serde(flatten)]
    pub policy: QueryPolicy,
}

impl Config {
    /// Config with defaults for everything but the dataset path
    pub fn with_database(path: impl Into<String>) -> Self {
        Self {
            database_path: path.into(),
            server: HttpServerConfig::default(),
            policy: QueryPolicy::default(),
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Load the file named by `--config` if any, apply `--database`, validate.
    pub fn resolve(args: &DatasetArgs) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::with_database(String::new()),
        };

        if let Some(database) = &args.database {
            config.database_path = database.display().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.database_path.trim().is_empty() {
            return Err(CliError::config_error(
                "database_path must be set in the config file or with --database",
            ));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        let policy_fields = [
            ("precipitation_cutoff", &self.policy.precipitation_cutoff),
            ("tobs_cutoff", &self.policy.tobs_cutoff),
            ("most_active_station", &self.policy.most_active_station),
        ];
        if let Some((name, _)) = policy_fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(CliError::config_error(format!("{} must not be empty", name)));
        }

        Ok(())
    }

    /// Get database path as Path
    pub fn database(&self) -> &Path {
        Path::new(&self.database_path)
    }
}
