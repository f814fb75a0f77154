//! Route directory types.

use std::collections::BTreeMap;

use serde::Serialize;

/// A route as listed on the provider's directory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    /// Short identifier used in feed URLs, e.g. `"2"`.
    pub code: String,
    /// Human-readable label, e.g. `"2 - Downtown B Line"`.
    pub display_name: String,
}

/// Known routes keyed by code.
pub type RouteDirectory = BTreeMap<String, String>;

/// Collect summaries into a directory. Later duplicates replace earlier ones.
pub fn into_directory(summaries: impl IntoIterator<Item = RouteSummary>) -> RouteDirectory {
    summaries
        .into_iter()
        .map(|s| (s.code, s.display_name))
        .collect()
}
