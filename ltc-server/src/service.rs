//! Query facade.
//!
//! Ties the transport, parsers and ranker together. Every failure the caller
//! can see is an [`UpstreamError`]: either the provider could not be reached
//! or it returned something the parser could not make sense of. Finer-grained
//! problems (a bad record, a bad arrival) are absorbed by the parser.

use std::future::Future;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{RouteDirectory, StopRecord};
use crate::feed::{StopFeed, parse_route_directory};
use crate::query::{QueryParams, filter_and_rank};
use crate::webwatch::{TransportError, WebWatchClient};

/// Where raw upstream pages come from.
///
/// Implemented by [`WebWatchClient`]; tests substitute an in-memory source.
pub trait FeedSource {
    /// Fetch the route directory HTML.
    fn fetch_directory(&self) -> impl Future<Output = Result<Arc<str>, TransportError>> + Send;

    /// Fetch the raw stop feed for `route`.
    fn fetch_stop_feed(
        &self,
        route: &str,
    ) -> impl Future<Output = Result<Arc<str>, TransportError>> + Send;
}

impl FeedSource for WebWatchClient {
    async fn fetch_directory(&self) -> Result<Arc<str>, TransportError> {
        self.fetch_directory_page().await
    }

    async fn fetch_stop_feed(&self, route: &str) -> Result<Arc<str>, TransportError> {
        self.fetch_stop_feed_text(route).await
    }
}

/// The provider could not be reached or returned an unusable page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct UpstreamError {
    /// Human-readable cause.
    pub reason: String,
    /// Route being queried, if the failure was route-specific.
    pub route: Option<String>,
}

impl UpstreamError {
    /// Reason given when a stop feed does not have the expected layout.
    pub const MALFORMED_FEED: &'static str = "malformed feed";

    fn transport(err: &TransportError, route: Option<&str>) -> Self {
        Self {
            reason: err.to_string(),
            route: route.map(str::to_string),
        }
    }

    fn malformed(route: &str) -> Self {
        Self {
            reason: Self::MALFORMED_FEED.to_string(),
            route: Some(route.to_string()),
        }
    }
}

/// Bus arrival queries against a feed source.
#[derive(Debug, Clone)]
pub struct TransitService<S> {
    source: S,
}

impl<S: FeedSource> TransitService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// List known routes.
    pub async fn get_routes(&self) -> Result<RouteDirectory, UpstreamError> {
        let html = self.source.fetch_directory().await.map_err(|e| {
            warn!(error = %e, "failed to fetch route directory");
            UpstreamError::transport(&e, None)
        })?;

        let routes = parse_route_directory(&html);
        info!(count = routes.len(), "loaded route directory");
        Ok(routes)
    }

    /// Fetch and parse the full feed for `route`, without filtering.
    pub async fn get_route_feed(&self, route: &str) -> Result<StopFeed, UpstreamError> {
        let raw = self.source.fetch_stop_feed(route).await.map_err(|e| {
            warn!(route, error = %e, "failed to fetch stop feed");
            UpstreamError::transport(&e, Some(route))
        })?;

        StopFeed::parse(&raw, route).map_err(|e| {
            warn!(route, error = %e, "stop feed has unexpected layout");
            UpstreamError::malformed(route)
        })
    }

    /// Stops on `route` matching `params`, nearest first when a location is given.
    pub async fn get_route_stops(
        &self,
        route: &str,
        params: &QueryParams,
    ) -> Result<Vec<StopRecord>, UpstreamError> {
        let feed = self.get_route_feed(route).await?;
        let stops = filter_and_rank(feed.stops, params);
        info!(route, count = stops.len(), "served route stops");
        Ok(stops)
    }
}
