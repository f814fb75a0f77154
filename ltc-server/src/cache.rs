//! Caching layer for upstream pages.
//!
//! Only the route directory is cached: it changes rarely and the upstream
//! site is slow. Stop feeds are live predictions and always fetched fresh.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

/// Configuration for the page cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// TTL for cached pages.
    pub ttl: Duration,

    /// Maximum number of cached pages.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 64,
        }
    }
}

/// Cache of page bodies keyed by URL.
#[derive(Clone)]
pub struct PageCache {
    pages: MokaCache<String, Arc<str>>,
}

impl PageCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let pages = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { pages }
    }

    /// Get a cached page body.
    pub async fn get(&self, url: &str) -> Option<Arc<str>> {
        self.pages.get(url).await
    }

    /// Store a page body.
    pub async fn insert(&self, url: impl Into<String>, body: Arc<str>) {
        self.pages.insert(url.into(), body).await;
    }

    /// Number of cached pages (approximate, for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.pages.entry_count()
    }

    /// Invalidate all cached pages.
    pub fn invalidate_all(&self) {
        self.pages.invalidate_all();
    }
}

impl std::fmt::Debug for PageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache")
            .field("entry_count", &self.pages.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_capacity, 64);
    }

    #[test]
    fn cache_creation() {
        let cache = PageCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn insert_then_get() {
        let cache = PageCache::new(&CacheConfig::default());
        let url = "http://example.test/ada.aspx";

        assert!(cache.get(url).await.is_none());
        cache.insert(url, Arc::from("<a class=\"ada\">2, Dundas</a>")).await;

        let body = cache.get(url).await.unwrap();
        assert_eq!(&*body, "<a class=\"ada\">2, Dundas</a>");
        assert!(cache.get("http://example.test/other").await.is_none());
    }

    #[tokio::test]
    async fn invalidate_all_clears_pages() {
        let cache = PageCache::new(&CacheConfig::default());
        cache.insert("u", Arc::from("body")).await;
        cache.invalidate_all();
        assert!(cache.get("u").await.is_none());
    }
}
