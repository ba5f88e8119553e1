//! Response DTOs for the sensor API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::{Decimal, Metric, MetricValues, SensorRecord};

/// Column-form response for the all-metrics query (GET /sensor/:sensorid)
///
/// Parallel ordered arrays: `time` carries milliseconds since epoch
/// (EventTime x 1000), and each metric array carries the matching value at
/// the same index. Arrays are ordered by ascending EventTime.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesResponse {
    /// Reading timestamps, milliseconds since epoch
    pub time: Vec<i64>,
    #[serde(rename = "PM1")]
    pub pm1: Vec<Decimal>,
    #[serde(rename = "PM2_5")]
    pub pm2_5: Vec<Decimal>,
    #[serde(rename = "PM4")]
    pub pm4: Vec<Decimal>,
    #[serde(rename = "PM10")]
    pub pm10: Vec<Decimal>,
    #[serde(rename = "VOC")]
    pub voc: Vec<Decimal>,
    #[serde(rename = "NOx")]
    pub nox: Vec<Decimal>,
}

impl SeriesResponse {
    /// Builds the column form from `(event_time_secs, values)` rows.
    pub fn from_rows(rows: &[(i64, MetricValues)]) -> Self {
        let mut response = Self {
            time: Vec::with_capacity(rows.len()),
            pm1: Vec::with_capacity(rows.len()),
            pm2_5: Vec::with_capacity(rows.len()),
            pm4: Vec::with_capacity(rows.len()),
            pm10: Vec::with_capacity(rows.len()),
            voc: Vec::with_capacity(rows.len()),
            nox: Vec::with_capacity(rows.len()),
        };
        for (event_time, values) in rows {
            response.time.push(event_time * 1000);
            response.pm1.push(values.pm1.clone());
            response.pm2_5.push(values.pm2_5.clone());
            response.pm4.push(values.pm4.clone());
            response.pm10.push(values.pm10.clone());
            response.voc.push(values.voc.clone());
            response.nox.push(values.nox.clone());
        }
        response
    }
}

/// One point of a single-metric series (GET /sensor/:sensorid/:reading_type)
///
/// `x`/`y` naming matches what the charting frontend consumes directly.
#[derive(Debug, Clone, Serialize)]
pub struct MetricPoint {
    /// Timestamp, milliseconds since epoch
    pub x: i64,
    /// Metric value at that time
    pub y: Decimal,
}

impl MetricPoint {
    /// Projects one metric out of `(event_time_secs, values)` rows.
    pub fn series(rows: &[(i64, MetricValues)], metric: Metric) -> Vec<Self> {
        rows.iter()
            .map(|(event_time, values)| Self {
                x: event_time * 1000,
                y: values.get(metric).clone(),
            })
            .collect()
    }
}

/// One entry of the sensor-registry listing (GET /sensors)
#[derive(Debug, Clone, Serialize)]
pub struct SensorSummary {
    /// Display name
    pub name: String,
    /// Device identifier
    pub uuid: String,
    /// `[Lat, Lon]`, decimal degrees
    pub location: [Decimal; 2],
}

impl From<SensorRecord> for SensorSummary {
    fn from(record: SensorRecord) -> Self {
        Self {
            name: record.device_name,
            uuid: record.device_id,
            location: [record.lat, record.lon],
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(base: &str) -> MetricValues {
        serde_json::from_str(&format!(
            r#"{{"RelativeHumidity":"40","Temperature":"21.5","PM1":"{base}","PM2_5":"5","PM4":"6","PM10":"9","VOC":"100","NOx":"12"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_series_response_column_names() {
        let rows = vec![(1_700_000_000, values("3"))];
        let json = serde_json::to_value(SeriesResponse::from_rows(&rows)).unwrap();
        assert_eq!(json["time"][0], 1_700_000_000_000_i64);
        assert_eq!(json["PM1"][0], "3");
        assert_eq!(json["PM2_5"][0], "5");
        assert_eq!(json["NOx"][0], "12");
    }

    #[test]
    fn test_series_response_preserves_row_order() {
        let rows = vec![(100, values("1")), (200, values("2"))];
        let response = SeriesResponse::from_rows(&rows);
        assert_eq!(response.time, vec![100_000, 200_000]);
        assert_eq!(response.pm1[0].as_str(), "1");
        assert_eq!(response.pm1[1].as_str(), "2");
    }

    #[test]
    fn test_metric_point_series() {
        let rows = vec![(100, values("1"))];
        let points = MetricPoint::series(&rows, Metric::Voc);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 100_000);
        assert_eq!(points[0].y.as_str(), "100");
    }

    #[test]
    fn test_sensor_summary_shape() {
        let record: SensorRecord = serde_json::from_str(
            r#"{"DeviceId":"dev-1","DeviceName":"Porch","Lat":"51.5","Lon":"-0.1"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(SensorSummary::from(record)).unwrap();
        assert_eq!(json["name"], "Porch");
        assert_eq!(json["uuid"], "dev-1");
        assert_eq!(json["location"][0], "51.5");
        assert_eq!(json["location"][1], "-0.1");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
