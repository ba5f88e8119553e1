//! API Module
//!
//! HTTP handlers and routing for the sensor API.
//!
//! # Endpoints
//! - `POST /readings` - Store one reading
//! - `GET /sensor/:sensorid` - All metrics over the trailing window
//! - `GET /sensor/:sensorid/:reading_type` - One metric as a point series
//! - `GET /sensors` - Sensor-registry listing
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
