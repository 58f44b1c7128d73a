//! Climate HTTP Routes
//!
//! The `/api/v1.0` endpoints. Each handler runs exactly one dataset query on
//! the blocking pool and serializes the rows as they come back.
//!
//! The literal segments `precipitation`, `stations` and `tobs` win over the
//! `:start` parameter; anything else in that position is taken as a start
//! date and compared as text, unvalidated.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::errors::ApiResult;
use crate::dataset::{
    Dataset, DatasetError, DatasetResult, PrecipitationRow, TemperatureObservation,
    TemperatureStats,
};

// ==================
// Shared State
// ==================

/// Climate state shared across handlers
pub struct ClimateState {
    pub dataset: Dataset,
}

impl ClimateState {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

/// Precipitation keyed by date. A date reported by several stations keeps
/// the value of the last row seen.
pub type PrecipitationByDate = BTreeMap<String, Option<f64>>;

// ==================
// Climate Routes
// ==================

/// Create climate routes, mounted under `/api/v1.0`
pub fn climate_routes(state: Arc<ClimateState>) -> Router {
    Router::new()
        .route("/precipitation", get(precipitation_handler))
        .route("/stations", get(stations_handler))
        .route("/tobs", get(tobs_handler))
        .route("/:start", get(stats_since_handler))
        .route("/:start/:end", get(stats_between_handler))
        .with_state(state)
}

/// Run a dataset query off the async runtime.
///
/// The query opens and drops its own connection inside the blocking task.
async fn run_query<T, F>(state: &Arc<ClimateState>, query: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Dataset) -> DatasetResult<T> + Send + 'static,
{
    let state = Arc::clone(state);
    let result = tokio::task::spawn_blocking(move || query(&state.dataset))
        .await
        .map_err(|e| DatasetError::TaskAborted(e.to_string()))?;
    Ok(result?)
}

/// Fold rows into a date map in arrival order
pub fn precipitation_by_date(rows: Vec<PrecipitationRow>) -> PrecipitationByDate {
    let mut by_date = PrecipitationByDate::new();
    for row in rows {
        by_date.insert(row.date, row.prcp);
    }
    by_date
}

// ==================
// Handlers
// ==================

async fn precipitation_handler(
    State(state): State<Arc<ClimateState>>,
) -> ApiResult<Json<PrecipitationByDate>> {
    let rows = run_query(&state, Dataset::precipitation_since_cutoff).await?;
    Ok(Json(precipitation_by_date(rows)))
}

async fn stations_handler(State(state): State<Arc<ClimateState>>) -> ApiResult<Json<Vec<String>>> {
    let codes = run_query(&state, Dataset::station_codes).await?;
    Ok(Json(codes))
}

async fn tobs_handler(
    State(state): State<Arc<ClimateState>>,
) -> ApiResult<Json<Vec<TemperatureObservation>>> {
    let observations = run_query(&state, Dataset::most_active_observations).await?;
    Ok(Json(observations))
}

/// Always a one-element array, all-null when nothing matched
async fn stats_since_handler(
    State(state): State<Arc<ClimateState>>,
    Path(start): Path<String>,
) -> ApiResult<Json<Vec<TemperatureStats>>> {
    let stats = run_query(&state, move |dataset| {
        dataset.temperature_stats_since(&start)
    })
    .await?;
    Ok(Json(vec![stats]))
}

async fn stats_between_handler(
    State(state): State<Arc<ClimateState>>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<Vec<TemperatureStats>>> {
    let stats = run_query(&state, move |dataset| {
        dataset.temperature_stats_between(&start, &end)
    })
    .await?;
    Ok(Json(vec![stats]))
}
