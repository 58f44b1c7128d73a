//! Observability HTTP Routes
//!
//! Liveness check and per-request logging.

use std::time::Instant;

use axum::{
    extract::Request, http::StatusCode, middleware::Next, response::IntoResponse,
    response::Response, routing::get, Json, Router,
};
use serde::Serialize;

use crate::observability::{Event, Logger};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route, mounted at root
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler. Does not touch the dataset.
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Middleware logging one `REQUEST_COMPLETE` line per request
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let duration_ms = started.elapsed().as_millis().to_string();
    Logger::info(
        Event::RequestComplete.as_str(),
        &[
            ("duration_ms", &duration_ms),
            ("method", &method),
            ("path", &path),
            ("status", &status),
        ],
    );

    response
}
