//! WebWatch HTTP client.
//!
//! Fetches the route directory page and per-route stop feeds. Every request
//! carries its own timeout; the directory page may be served from cache.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::{debug, warn};

use crate::cache::{CacheConfig, PageCache};

use super::error::TransportError;

/// Default base URL for the WebWatch site.
pub const DEFAULT_BASE_URL: &str = "http://www.ltconline.ca/WebWatch";

/// Directory page listing all routes.
const DIRECTORY_PAGE: &str = "ada.aspx";

/// Map feed for one route, selected by the `u` query parameter.
const STOP_FEED_PAGE: &str = "UpdateWebMap.aspx";

/// Configuration for the WebWatch client.
#[derive(Debug, Clone, PartialEq)]
pub struct WebWatchConfig {
    /// Base URL, without a trailing slash
    pub base_url: String,
    /// Timeout for the directory page in seconds
    pub directory_timeout_secs: u64,
    /// Timeout for stop feeds in seconds
    pub stops_timeout_secs: u64,
    /// Directory page cache settings
    pub cache: CacheConfig,
}

impl WebWatchConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            directory_timeout_secs: 30,
            stops_timeout_secs: 60,
            cache: CacheConfig::default(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the directory page timeout.
    pub fn with_directory_timeout(mut self, secs: u64) -> Self {
        self.directory_timeout_secs = secs;
        self
    }

    /// Set the stop feed timeout.
    pub fn with_stops_timeout(mut self, secs: u64) -> Self {
        self.stops_timeout_secs = secs;
        self
    }

    /// Set the cache configuration.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }
}

impl Default for WebWatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// WebWatch client.
#[derive(Debug, Clone)]
pub struct WebWatchClient {
    http: reqwest::Client,
    base_url: String,
    directory_timeout: Duration,
    stops_timeout: Duration,
    cache: PageCache,
}

impl WebWatchClient {
    /// Create a new client with the given configuration.
    pub fn new(config: WebWatchConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            directory_timeout: Duration::from_secs(config.directory_timeout_secs),
            stops_timeout: Duration::from_secs(config.stops_timeout_secs),
            cache: PageCache::new(&config.cache),
        })
    }

    /// URL of the route directory page.
    pub fn directory_url(&self) -> Result<Url, TransportError> {
        let raw = format!("{}/{}", self.base_url, DIRECTORY_PAGE);
        Url::parse(&raw).map_err(|e| TransportError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// URL of the stop feed for `route`.
    pub fn stop_feed_url(&self, route: &str) -> Result<Url, TransportError> {
        let raw = format!("{}/{}", self.base_url, STOP_FEED_PAGE);
        Url::parse_with_params(&raw, &[("u", route)])
            .map_err(|e| TransportError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// Fetch the route directory page (cached).
    pub async fn fetch_directory_page(&self) -> Result<Arc<str>, TransportError> {
        let url = self.directory_url()?;
        self.fetch(url, self.directory_timeout, true).await
    }

    /// Fetch the live stop feed for `route` (never cached).
    pub async fn fetch_stop_feed_text(&self, route: &str) -> Result<Arc<str>, TransportError> {
        let url = self.stop_feed_url(route)?;
        self.fetch(url, self.stops_timeout, false).await
    }

    /// Fetch a page body.
    ///
    /// With `use_cache`, a cached body is returned if present and a fresh one
    /// is stored after a successful fetch.
    pub async fn fetch(
        &self,
        url: Url,
        timeout: Duration,
        use_cache: bool,
    ) -> Result<Arc<str>, TransportError> {
        if use_cache && let Some(body) = self.cache.get(url.as_str()).await {
            debug!(%url, "cache hit");
            return Ok(body);
        }

        let response = self
            .http
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, url.as_str(), timeout))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            warn!(%url, "upstream page not found");
            return Err(TransportError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "upstream error status");
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Arc<str> = response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(e, url.as_str(), timeout))?
            .into();

        debug!(%url, bytes = body.len(), "fetched page");

        if use_cache {
            self.cache.insert(url.as_str(), Arc::clone(&body)).await;
        }

        Ok(body)
    }

    /// Drop all cached pages.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
