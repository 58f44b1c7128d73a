//! # HTTP Server
//!
//! Combines the home page, health check and climate routers behind the CORS
//! and request-logging layers.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::climate_routes::{climate_routes, ClimateState};
use super::config::HttpServerConfig;
use super::home_routes::home_routes;
use super::observability_routes::{health_routes, log_request};
use crate::dataset::Dataset;
use crate::observability::{log_event, log_event_with_fields, Event};

/// HTTP server for the climate API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an opened dataset
    pub fn new(config: HttpServerConfig, dataset: Dataset) -> Self {
        let router = Self::build_router(&config, dataset);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, dataset: Dataset) -> Router {
        let climate_state = Arc::new(ClimateState::new(dataset));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new().allow_origin(Any).allow_methods(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
        };

        Router::new()
            .merge(home_routes())
            .merge(health_routes())
            .nest("/api/v1.0", climate_routes(climate_state))
            .layer(cors)
            .layer(middleware::from_fn(log_request))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        let local = listener.local_addr()?.to_string();
        log_event_with_fields(Event::ServerListening, &[("addr", &local)]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerStopped);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed the server simply runs until killed
    let _ = tokio::signal::ctrl_c().await;
}
