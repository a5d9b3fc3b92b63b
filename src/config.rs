//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::web::DEFAULT_PAGE_TTL;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached pages
    pub page_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Flush the backing store before serving
    pub flush_on_start: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PAGE_TTL` - Page cache TTL in seconds (default: 10)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `FLUSH_ON_START` - `true`/`false` (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            page_ttl: parse_var("PAGE_TTL")
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.page_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
            flush_on_start: parse_var("FLUSH_ON_START").unwrap_or(defaults.flush_on_start),
        }
    }
}

/// Reads and parses an environment variable, ignoring unset or malformed values.
fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            page_ttl: DEFAULT_PAGE_TTL,
            cleanup_interval: 1,
            flush_on_start: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.page_ttl, 10);
        assert_eq!(config.cleanup_interval, 1);
        assert!(config.flush_on_start);
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("SERVER_PORT", "8080");
        env::set_var("PAGE_TTL", "0");
        env::set_var("CLEANUP_INTERVAL", "oops");
        env::set_var("FLUSH_ON_START", "false");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.page_ttl, 10);
        assert_eq!(config.cleanup_interval, 1);
        assert!(!config.flush_on_start);

        env::remove_var("SERVER_PORT");
        env::remove_var("PAGE_TTL");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("FLUSH_ON_START");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert!(config.flush_on_start);
    }
}
