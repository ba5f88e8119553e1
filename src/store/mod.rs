//! Store Module
//!
//! In-process table store backing the API: an ordered readings table keyed
//! by `(DeviceId, EventTime)` for range queries, and a sensor registry keyed
//! by `DeviceId` for paginated scans.

mod readings;
mod registry;


// Re-export public types
pub use readings::{current_timestamp_secs, ReadingsTable};
pub use registry::{ScanPage, SensorRegistry};

// == Public Constants ==
/// Maximum allowed DeviceId length in bytes
pub const MAX_DEVICE_ID_LENGTH: usize = 256;

/// Default number of registry records returned per scan page
pub const DEFAULT_SCAN_PAGE_SIZE: usize = 100;
