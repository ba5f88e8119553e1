//! Request DTOs for the sensor API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::MetricValues;
use crate::store::MAX_DEVICE_ID_LENGTH;

/// Request body for creating a reading (POST /readings)
///
/// # Fields
/// - `device_id`: the submitting device (`DeviceId`)
/// - `values`: the eight metric fields, flattened into the same JSON object
///
/// EventTime is never part of the payload: it is assigned server-side at
/// write time, so there is no backfill path.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReading {
    /// The submitting device
    #[serde(rename = "DeviceId")]
    pub device_id: String,
    /// The metric tuple for this reading
    #[serde(flatten)]
    pub values: MetricValues,
}

impl NewReading {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.device_id.is_empty() {
            return Some("DeviceId cannot be empty".to_string());
        }
        if self.device_id.len() > MAX_DEVICE_ID_LENGTH {
            return Some(format!(
                "DeviceId exceeds maximum length of {} characters",
                MAX_DEVICE_ID_LENGTH
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAYLOAD: &str = r#"{"DeviceId":"dev-1","RelativeHumidity":"40","Temperature":"21.5","PM1":"3","PM2_5":"5","PM4":"6","PM10":"9","VOC":"100","NOx":"12"}"#;

    #[test]
    fn test_new_reading_deserialize() {
        let req: NewReading = serde_json::from_str(FULL_PAYLOAD).unwrap();
        assert_eq!(req.device_id, "dev-1");
        assert_eq!(req.values.temperature.as_str(), "21.5");
        assert_eq!(req.values.pm2_5.as_str(), "5");
    }

    #[test]
    fn test_new_reading_missing_device_id() {
        let json = r#"{"RelativeHumidity":"40","Temperature":"21.5","PM1":"3","PM2_5":"5","PM4":"6","PM10":"9","VOC":"100","NOx":"12"}"#;
        assert!(serde_json::from_str::<NewReading>(json).is_err());
    }

    #[test]
    fn test_new_reading_missing_metric() {
        let json = r#"{"DeviceId":"dev-1","Temperature":"21.5"}"#;
        assert!(serde_json::from_str::<NewReading>(json).is_err());
    }

    #[test]
    fn test_new_reading_numeric_fields() {
        // Firmware variants post bare numbers instead of strings
        let json = r#"{"DeviceId":"dev-1","RelativeHumidity":40,"Temperature":21.5,"PM1":3,"PM2_5":5,"PM4":6,"PM10":9,"VOC":100,"NOx":12}"#;
        let req: NewReading = serde_json::from_str(json).unwrap();
        assert_eq!(req.values.relative_humidity.as_str(), "40");
        assert_eq!(req.values.temperature.as_str(), "21.5");
    }

    #[test]
    fn test_validate_empty_device_id() {
        let mut req: NewReading = serde_json::from_str(FULL_PAYLOAD).unwrap();
        req.device_id = String::new();
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req: NewReading = serde_json::from_str(FULL_PAYLOAD).unwrap();
        assert!(req.validate().is_none());
    }
}
