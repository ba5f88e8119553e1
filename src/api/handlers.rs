//! API Handlers
//!
//! HTTP request handlers for each sensor API endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::models::{
    HealthResponse, Metric, MetricPoint, MetricValues, NewReading, SensorSummary, SeriesResponse,
};
use crate::store::{current_timestamp_secs, ReadingsTable, SensorRegistry};

/// Application state shared across all handlers.
///
/// The tables are constructed once at startup and cloned into handlers as
/// Arc handles, so every invocation reuses the same store.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe readings table
    pub readings: Arc<RwLock<ReadingsTable>>,
    /// Thread-safe sensor registry
    pub sensors: Arc<RwLock<SensorRegistry>>,
    /// Trailing query window in seconds
    pub query_window_secs: i64,
}

impl AppState {
    /// Creates a new AppState around the given tables.
    pub fn new(readings: ReadingsTable, sensors: SensorRegistry, query_window_secs: i64) -> Self {
        Self {
            readings: Arc::new(RwLock::new(readings)),
            sensors: Arc::new(RwLock::new(sensors)),
            query_window_secs,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            ReadingsTable::new(),
            SensorRegistry::new(config.scan_page_size),
            config.query_window_secs,
        )
    }
}

/// Handler for POST /readings
///
/// Stores one reading for a device. EventTime is assigned here, at write
/// time; clients cannot backfill. Returns 201 with an empty body.
///
/// The body is taken raw and parsed explicitly so that a malformed payload
/// follows the generic 500 error contract instead of the extractor's 4xx.
pub async fn create_reading_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<StatusCode> {
    // Payload is logged before validation on every write
    debug!(payload = %body, "inbound reading");

    let reading: NewReading = serde_json::from_str(&body)
        .map_err(|e| ApiError::Validation(format!("malformed reading payload: {e}")))?;
    if let Some(error_msg) = reading.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let event_time = current_timestamp_secs();
    let mut readings = state.readings.write().await;
    readings.put(&reading.device_id, event_time, reading.values)?;

    info!(device_id = %reading.device_id, event_time, "reading stored");
    Ok(StatusCode::CREATED)
}

/// Handler for GET /sensor/:sensorid
///
/// Returns all metrics for one device over the trailing query window, in
/// column form (parallel `time` and per-metric arrays). 404 when the window
/// holds no readings.
pub async fn sensor_series_handler(
    State(state): State<AppState>,
    Path(sensorid): Path<String>,
) -> Result<Json<SeriesResponse>> {
    debug!(%sensorid, "query all metrics");

    let rows = readings_in_window(&state, &sensorid).await;
    if rows.is_empty() {
        return Err(ApiError::NoData);
    }

    Ok(Json(SeriesResponse::from_rows(&rows)))
}

/// Handler for GET /sensor/:sensorid/:reading_type
///
/// Same trailing window as the all-metrics query, projected to one metric
/// and shaped as `{x, y}` points. An unknown metric name is a validation
/// failure (500), matching the write-path contract.
pub async fn metric_series_handler(
    State(state): State<AppState>,
    Path((sensorid, reading_type)): Path<(String, String)>,
) -> Result<Json<Vec<MetricPoint>>> {
    debug!(%sensorid, %reading_type, "query single metric");

    let metric: Metric = reading_type.parse()?;
    let rows = readings_in_window(&state, &sensorid).await;
    if rows.is_empty() {
        return Err(ApiError::NoData);
    }

    Ok(Json(MetricPoint::series(&rows, metric)))
}

/// Handler for GET /sensors
///
/// Lists the full sensor registry, looping scan pages until the
/// continuation token runs out so no records are dropped past the first
/// page. 404 when the registry is empty.
pub async fn list_sensors_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SensorSummary>>> {
    let registry = state.sensors.read().await;

    let mut records = Vec::new();
    let mut start_after: Option<String> = None;
    loop {
        let page = registry.scan(start_after.as_deref());
        records.extend(page.items);
        match page.last_key {
            Some(key) => start_after = Some(key),
            None => break,
        }
    }
    debug!(count = records.len(), "registry scan complete");

    if records.is_empty() {
        return Err(ApiError::NoData);
    }

    Ok(Json(records.into_iter().map(SensorSummary::from).collect()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Shared window lookup for both query shapes: readings for one device with
/// EventTime at or after now minus the configured window, ascending.
async fn readings_in_window(state: &AppState, device_id: &str) -> Vec<(i64, MetricValues)> {
    let since = current_timestamp_secs() - state.query_window_secs;
    let readings = state.readings.read().await;
    readings.query_since(device_id, since)
}
