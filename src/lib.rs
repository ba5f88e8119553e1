//! Airsense - A lightweight ingestion and query API for environmental
//! sensor readings
//!
//! Accepts particulate/gas/climate readings over HTTP and serves
//! time-windowed queries plus a sensor-registry listing.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
