//! Reading Domain Types
//!
//! Defines the metric vocabulary and the decimal-string value representation
//! shared by the write path, the store, and the query responses.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// == Decimal ==
/// A numeric reading value carried as a decimal string.
///
/// The store keeps every metric in its original textual form so values round-trip
/// exactly as submitted ("21.5" stays "21.5", never 21.499999…). Accepts
/// either a JSON number or a JSON string on input; always serializes as a
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Decimal(String);

impl Decimal {
    /// Creates a Decimal from raw text, validating that it parses as a
    /// finite floating-point number.
    pub fn new(raw: impl Into<String>) -> Result<Self, ApiError> {
        let raw = raw.into();
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(raw)),
            _ => Err(ApiError::Validation(format!(
                "not a decimal number: '{}'",
                raw
            ))),
        }
    }

    /// Returns the textual form of the value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let text = match raw {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                return Err(de::Error::custom(format!(
                    "expected number or string, got {}",
                    other
                )))
            }
        };
        Decimal::new(text).map_err(de::Error::custom)
    }
}

// == Metric ==
/// The measurable quantities a reading carries.
///
/// Path parameters and payload fields both use the canonical attribute
/// names (`PM2_5`, `VOC`, …), so parsing and field naming share one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    RelativeHumidity,
    Temperature,
    Pm1,
    Pm2_5,
    Pm4,
    Pm10,
    Voc,
    Nox,
}

impl Metric {
    /// The canonical attribute name used in payloads and routes.
    pub fn field_name(&self) -> &'static str {
        match self {
            Metric::RelativeHumidity => "RelativeHumidity",
            Metric::Temperature => "Temperature",
            Metric::Pm1 => "PM1",
            Metric::Pm2_5 => "PM2_5",
            Metric::Pm4 => "PM4",
            Metric::Pm10 => "PM10",
            Metric::Voc => "VOC",
            Metric::Nox => "NOx",
        }
    }
}

impl FromStr for Metric {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RelativeHumidity" => Ok(Metric::RelativeHumidity),
            "Temperature" => Ok(Metric::Temperature),
            "PM1" => Ok(Metric::Pm1),
            "PM2_5" => Ok(Metric::Pm2_5),
            "PM4" => Ok(Metric::Pm4),
            "PM10" => Ok(Metric::Pm10),
            "VOC" => Ok(Metric::Voc),
            "NOx" => Ok(Metric::Nox),
            other => Err(ApiError::Validation(format!(
                "unknown reading type: '{}'",
                other
            ))),
        }
    }
}

// == Metric Values ==
/// The full metric tuple stored for one reading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetricValues {
    #[serde(rename = "RelativeHumidity")]
    pub relative_humidity: Decimal,
    #[serde(rename = "Temperature")]
    pub temperature: Decimal,
    #[serde(rename = "PM1")]
    pub pm1: Decimal,
    #[serde(rename = "PM2_5")]
    pub pm2_5: Decimal,
    #[serde(rename = "PM4")]
    pub pm4: Decimal,
    #[serde(rename = "PM10")]
    pub pm10: Decimal,
    #[serde(rename = "VOC")]
    pub voc: Decimal,
    #[serde(rename = "NOx")]
    pub nox: Decimal,
}

impl MetricValues {
    /// Returns the value for one metric.
    pub fn get(&self, metric: Metric) -> &Decimal {
        match metric {
            Metric::RelativeHumidity => &self.relative_humidity,
            Metric::Temperature => &self.temperature,
            Metric::Pm1 => &self.pm1,
            Metric::Pm2_5 => &self.pm2_5,
            Metric::Pm4 => &self.pm4,
            Metric::Pm10 => &self.pm10,
            Metric::Voc => &self.voc,
            Metric::Nox => &self.nox,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_from_string() {
        let d = Decimal::new("21.5").unwrap();
        assert_eq!(d.as_str(), "21.5");
    }

    #[test]
    fn test_decimal_rejects_non_numeric() {
        assert!(Decimal::new("porch").is_err());
        assert!(Decimal::new("").is_err());
        assert!(Decimal::new("NaN").is_err());
    }

    #[test]
    fn test_decimal_deserialize_number_or_string() {
        let from_string: Decimal = serde_json::from_str(r#""40""#).unwrap();
        assert_eq!(from_string.as_str(), "40");

        let from_number: Decimal = serde_json::from_str("21.5").unwrap();
        assert_eq!(from_number.as_str(), "21.5");
    }

    #[test]
    fn test_decimal_deserialize_rejects_other_types() {
        assert!(serde_json::from_str::<Decimal>("true").is_err());
        assert!(serde_json::from_str::<Decimal>("[1]").is_err());
    }

    #[test]
    fn test_decimal_serializes_as_string() {
        let d = Decimal::new("-0.1").unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""-0.1""#);
    }

    #[test]
    fn test_metric_parse_round_trip() {
        for name in ["RelativeHumidity", "Temperature", "PM1", "PM2_5", "PM4", "PM10", "VOC", "NOx"] {
            let metric: Metric = name.parse().unwrap();
            assert_eq!(metric.field_name(), name);
        }
    }

    #[test]
    fn test_metric_parse_unknown() {
        assert!("pm1".parse::<Metric>().is_err());
        assert!("CO2".parse::<Metric>().is_err());
    }

    #[test]
    fn test_metric_values_get() {
        let values: MetricValues = serde_json::from_str(
            r#"{"RelativeHumidity":"40","Temperature":"21.5","PM1":"3","PM2_5":"5","PM4":"6","PM10":"9","VOC":"100","NOx":"12"}"#,
        )
        .unwrap();
        assert_eq!(values.get(Metric::Pm2_5).as_str(), "5");
        assert_eq!(values.get(Metric::Nox).as_str(), "12");
    }
}
