//! Application state for the web layer.

use std::sync::Arc;

use crate::service::TransitService;
use crate::webwatch::WebWatchClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Query facade over the WebWatch client
    pub service: Arc<TransitService<WebWatchClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(client: WebWatchClient) -> Self {
        Self {
            service: Arc::new(TransitService::new(client)),
        }
    }
}
