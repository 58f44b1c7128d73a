//! # SurfsUp HTTP Server Module
//!
//! Read-only JSON API over the climate dataset.
//!
//! # Endpoints
//!
//! - `/` - Home page listing the routes
//! - `/health` - Health check
//! - `/api/v1.0/precipitation` - Precipitation by date since the cutoff
//! - `/api/v1.0/stations` - Station codes
//! - `/api/v1.0/tobs` - Observations for the most active station
//! - `/api/v1.0/:start` and `/api/v1.0/:start/:end` - Temperature min/avg/max

pub mod climate_routes;
pub mod config;
pub mod errors;
pub mod home_routes;
pub mod observability_routes;
pub mod server;

pub use climate_routes::{precipitation_by_date, ClimateState, PrecipitationByDate};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
