//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::store::DEFAULT_SCAN_PAGE_SIZE;

/// Trailing query window applied to sensor queries, in seconds (24 hours).
pub const DEFAULT_QUERY_WINDOW_SECS: i64 = 86_400;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Trailing query window in seconds for sensor queries
    pub query_window_secs: i64,
    /// Registry scan page size
    pub scan_page_size: usize,
    /// Optional path to a JSON seed file for the sensor registry
    pub sensors_file: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `QUERY_WINDOW_SECS` - Trailing query window in seconds (default: 86400)
    /// - `SCAN_PAGE_SIZE` - Registry scan page size (default: 100)
    /// - `SENSORS_FILE` - Registry seed file path (default: none)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            query_window_secs: env::var("QUERY_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_QUERY_WINDOW_SECS),
            scan_page_size: env::var("SCAN_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SCAN_PAGE_SIZE),
            sensors_file: env::var("SENSORS_FILE").ok().filter(|v| !v.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            query_window_secs: DEFAULT_QUERY_WINDOW_SECS,
            scan_page_size: DEFAULT_SCAN_PAGE_SIZE,
            sensors_file: None,
        }
    }
}
