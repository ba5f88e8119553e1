//! Request, response and domain models for the sensor API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP bodies, plus the shared domain types
//! (metric vocabulary, decimal value representation, registry records).

pub mod reading;
pub mod requests;
pub mod responses;
pub mod sensor;

// Re-export commonly used types
pub use reading::{Decimal, Metric, MetricValues};
pub use requests::NewReading;
pub use responses::{HealthResponse, MetricPoint, SensorSummary, SeriesResponse};
pub use sensor::SensorRecord;
