//! Sensor Registry Module
//!
//! Read-mostly catalog of known devices. The API only scans it; records
//! enter through startup seeding (or tests).

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::models::SensorRecord;
use crate::store::DEFAULT_SCAN_PAGE_SIZE;

// == Scan Page ==
/// One page of a registry scan.
#[derive(Debug, Clone)]
pub struct ScanPage {
    /// Records in this page, in DeviceId order
    pub items: Vec<SensorRecord>,
    /// Continuation token: pass back as `start_after` to fetch the next
    /// page. None means the scan is exhausted.
    pub last_key: Option<String>,
}

// == Sensor Registry ==
/// Registry storage keyed by DeviceId, with paginated full scans.
#[derive(Debug)]
pub struct SensorRegistry {
    /// DeviceId -> record, in key order
    sensors: BTreeMap<String, SensorRecord>,
    /// Number of records returned per scan page
    page_size: usize,
}

impl Default for SensorRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_PAGE_SIZE)
    }
}

impl SensorRegistry {
    // == Constructor ==
    /// Creates an empty registry with the given scan page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            sensors: BTreeMap::new(),
            // A zero page size would make every scan loop forever
            page_size: page_size.max(1),
        }
    }

    // == Insert ==
    /// Adds or replaces a registry record, keyed by its DeviceId.
    pub fn insert(&mut self, record: SensorRecord) {
        self.sensors.insert(record.device_id.clone(), record);
    }

    // == Scan ==
    /// Returns one page of records in DeviceId order.
    ///
    /// # Arguments
    /// * `start_after` - Exclusive lower bound, taken from the previous
    ///   page's `last_key`; None starts from the beginning.
    ///
    /// A full final page still carries a `last_key`; the following scan
    /// returns an empty page with `last_key: None`, which terminates the
    /// caller's loop.
    pub fn scan(&self, start_after: Option<&str>) -> ScanPage {
        let range = match start_after {
            Some(key) => self
                .sensors
                .range::<str, _>((Bound::Excluded(key), Bound::Unbounded)),
            None => self.sensors.range::<str, _>(..),
        };

        let items: Vec<SensorRecord> = range
            .take(self.page_size)
            .map(|(_, record)| record.clone())
            .collect();

        let last_key = if items.len() == self.page_size {
            items.last().map(|record| record.device_id.clone())
        } else {
            None
        };

        ScanPage { items, last_key }
    }

    // == Length ==
    /// Returns the number of registered sensors.
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    // == Is Empty ==
    /// Returns true if no sensors are registered.
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> SensorRecord {
        serde_json::from_str(&format!(
            r#"{{"DeviceId":"{id}","DeviceName":"Sensor {id}","Lat":"51.5","Lon":"-0.1"}}"#
        ))
        .unwrap()
    }

    fn scan_all(registry: &SensorRegistry) -> Vec<SensorRecord> {
        let mut items = Vec::new();
        let mut start_after: Option<String> = None;
        loop {
            let page = registry.scan(start_after.as_deref());
            items.extend(page.items);
            match page.last_key {
                Some(key) => start_after = Some(key),
                None => break,
            }
        }
        items
    }

    #[test]
    fn test_scan_empty_registry() {
        let registry = SensorRegistry::new(10);
        let page = registry.scan(None);
        assert!(page.items.is_empty());
        assert!(page.last_key.is_none());
    }

    #[test]
    fn test_scan_single_page() {
        let mut registry = SensorRegistry::new(10);
        registry.insert(record("a"));
        registry.insert(record("b"));

        let page = registry.scan(None);
        assert_eq!(page.items.len(), 2);
        assert!(page.last_key.is_none());
    }

    #[test]
    fn test_scan_pagination_covers_all_records() {
        let mut registry = SensorRegistry::new(2);
        for id in ["a", "b", "c", "d", "e"] {
            registry.insert(record(id));
        }

        let items = scan_all(&registry);
        assert_eq!(items.len(), 5);
        let ids: Vec<&str> = items.iter().map(|r| r.device_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_scan_exactly_full_last_page() {
        let mut registry = SensorRegistry::new(2);
        registry.insert(record("a"));
        registry.insert(record("b"));

        let first = registry.scan(None);
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.last_key.as_deref(), Some("b"));

        let second = registry.scan(first.last_key.as_deref());
        assert!(second.items.is_empty());
        assert!(second.last_key.is_none());
    }

    #[test]
    fn test_insert_replaces_existing_device() {
        let mut registry = SensorRegistry::new(10);
        registry.insert(record("a"));
        let mut updated = record("a");
        updated.device_name = "Renamed".to_string();
        registry.insert(updated);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.scan(None).items[0].device_name, "Renamed");
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let mut registry = SensorRegistry::new(0);
        registry.insert(record("a"));
        let items = scan_all(&registry);
        assert_eq!(items.len(), 1);
    }
}
