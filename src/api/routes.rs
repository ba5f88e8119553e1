//! API Routes
//!
//! Configures the Axum router with all sensor API endpoints.
//!
//! The legacy handler dispatched on chained method/resource conditionals,
//! which let an unmatched request fall through to a 500 without the CORS
//! header. The explicit route table plus a global CORS layer keeps the
//! status contract while applying the header uniformly.

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    create_reading_handler, health_handler, list_sensors_handler, metric_series_handler,
    sensor_series_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /readings` - Store one reading (EventTime assigned server-side)
/// - `GET /sensor/:sensorid` - All metrics over the trailing window, column form
/// - `GET /sensor/:sensorid/:reading_type` - One metric as `{x, y}` points
/// - `GET /sensors` - Full sensor-registry listing
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: `Access-Control-Allow-Origin: *` on every response
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints. The per-route fallback catches
    // method mismatches on registered paths, which would otherwise surface
    // as a bare 405 instead of the generic 500.
    Router::new()
        .route(
            "/readings",
            post(create_reading_handler).fallback(unmatched_route_handler),
        )
        .route(
            "/sensor/:sensorid",
            get(sensor_series_handler).fallback(unmatched_route_handler),
        )
        .route(
            "/sensor/:sensorid/:reading_type",
            get(metric_series_handler).fallback(unmatched_route_handler),
        )
        .route(
            "/sensors",
            get(list_sensors_handler).fallback(unmatched_route_handler),
        )
        .route(
            "/health",
            get(health_handler).fallback(unmatched_route_handler),
        )
        .fallback(unmatched_route_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for requests matching no route, or no method on a route.
///
/// Keeps the legacy status contract: anything outside the dispatch table
/// reports the generic 500 body rather than a 404 or 405, since 404 is
/// reserved for empty query results.
async fn unmatched_route_handler(uri: Uri) -> impl IntoResponse {
    warn!(%uri, "unmatched route");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"status": "Server error"})),
    )
}
