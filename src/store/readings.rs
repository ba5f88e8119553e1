//! Readings Table Module
//!
//! Ordered storage for sensor readings, keyed by device and event time.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ApiError, Result};
use crate::models::MetricValues;
use crate::store::MAX_DEVICE_ID_LENGTH;

// == Readings Table ==
/// Reading storage with per-device ordered range reads.
///
/// Keyed by `(DeviceId, EventTime)`: EventTime is the sort key at second
/// granularity, so a second write for the same device in the same second
/// overwrites the first.
#[derive(Debug, Default)]
pub struct ReadingsTable {
    /// DeviceId -> (EventTime -> metric tuple), both orderings stable
    by_device: BTreeMap<String, BTreeMap<i64, MetricValues>>,
}

impl ReadingsTable {
    // == Constructor ==
    /// Creates a new empty readings table.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores one reading under `(device_id, event_time)`.
    ///
    /// Upsert semantics: an existing reading at the same key is replaced.
    ///
    /// # Arguments
    /// * `device_id` - The submitting device
    /// * `event_time` - Server-assigned timestamp, seconds since epoch
    /// * `values` - The metric tuple to store
    pub fn put(&mut self, device_id: &str, event_time: i64, values: MetricValues) -> Result<()> {
        if device_id.is_empty() {
            return Err(ApiError::Store("DeviceId cannot be empty".to_string()));
        }
        if device_id.len() > MAX_DEVICE_ID_LENGTH {
            return Err(ApiError::Store(format!(
                "DeviceId exceeds maximum length of {} bytes",
                MAX_DEVICE_ID_LENGTH
            )));
        }

        self.by_device
            .entry(device_id.to_string())
            .or_default()
            .insert(event_time, values);

        Ok(())
    }

    // == Query Since ==
    /// Returns all readings for a device with `event_time >= since`, in
    /// ascending event-time order.
    ///
    /// An unknown device yields an empty result, not an error; the caller
    /// decides how emptiness maps to the HTTP contract.
    pub fn query_since(&self, device_id: &str, since: i64) -> Vec<(i64, MetricValues)> {
        self.by_device
            .get(device_id)
            .map(|rows| {
                rows.range(since..)
                    .map(|(event_time, values)| (*event_time, values.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    // == Length ==
    /// Returns the total number of stored readings across all devices.
    pub fn len(&self) -> usize {
        self.by_device.values().map(|rows| rows.len()).sum()
    }

    // == Is Empty ==
    /// Returns true if no readings are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs() as i64
}
