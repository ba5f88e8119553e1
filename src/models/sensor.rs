//! Sensor Registry Record
//!
//! Catalog entry for one known device. Registry lifecycle is external to
//! this service: records are only read (optionally seeded from a JSON file
//! at startup), never created or mutated through the API.

use serde::Deserialize;

use crate::models::Decimal;

// == Sensor Record ==
/// One registry entry: device identity plus display name and location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SensorRecord {
    /// Stable device identifier (registry partition key)
    #[serde(rename = "DeviceId")]
    pub device_id: String,
    /// Human-readable display name
    #[serde(rename = "DeviceName")]
    pub device_name: String,
    /// Latitude, decimal degrees
    #[serde(rename = "Lat")]
    pub lat: Decimal,
    /// Longitude, decimal degrees
    #[serde(rename = "Lon")]
    pub lon: Decimal,
}
