//! LTC WebWatch client.
//!
//! WebWatch is the transit provider's public arrivals site. It has no API:
//! routes are listed on an HTML page and each route's stops and predicted
//! arrivals come from a text feed that backs the site's map view.
//!
//! - The directory page rarely changes and is cached.
//! - Stop feeds are live and fetched on every request with a bounded timeout.

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, WebWatchClient, WebWatchConfig};
pub use error::TransportError;
