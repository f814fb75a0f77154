//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `LTC_BIND_ADDR` | `127.0.0.1:5000` |
//! | `LTC_BASE_URL` | `http://www.ltconline.ca/WebWatch` |
//! | `LTC_STOPS_TIMEOUT_SECS` | `60` |
//! | `LTC_DIRECTORY_TIMEOUT_SECS` | `30` |
//! | `LTC_CACHE_TTL_SECS` | `3600` |
//! | `LTC_CACHE_CAPACITY` | `64` |
//! | `DEBUG` | unset; any non-empty value enables debug logging |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::webwatch::WebWatchConfig;

/// An environment variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub message: String,
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Upstream client settings
    pub webwatch: WebWatchConfig,
    /// Verbose logging
    pub debug: bool,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_var(&lookup, "LTC_BIND_ADDR")?.unwrap_or_else(default_bind_addr);

        let mut webwatch = WebWatchConfig::new();
        if let Some(base_url) = lookup("LTC_BASE_URL").filter(|v| !v.is_empty()) {
            webwatch = webwatch.with_base_url(base_url);
        }
        if let Some(secs) = parse_var(&lookup, "LTC_STOPS_TIMEOUT_SECS")? {
            webwatch = webwatch.with_stops_timeout(secs);
        }
        if let Some(secs) = parse_var(&lookup, "LTC_DIRECTORY_TIMEOUT_SECS")? {
            webwatch = webwatch.with_directory_timeout(secs);
        }

        let mut cache = CacheConfig::default();
        if let Some(secs) = parse_var(&lookup, "LTC_CACHE_TTL_SECS")? {
            cache.ttl = Duration::from_secs(secs);
        }
        if let Some(capacity) = parse_var(&lookup, "LTC_CACHE_CAPACITY")? {
            cache.max_capacity = capacity;
        }
        webwatch = webwatch.with_cache(cache);

        let debug = lookup("DEBUG").is_some_and(|v| !v.is_empty());

        Ok(Self {
            bind_addr,
            webwatch,
            debug,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            webwatch: WebWatchConfig::new(),
            debug: false,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

/// Read and parse an optional variable. Empty values count as unset.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(key).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match value.trim().parse::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => Err(ConfigError {
            key,
            message: e.to_string(),
            value,
        }),
    }
}
