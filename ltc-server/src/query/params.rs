//! Query parameters for stop lookups.

use serde::Deserialize;

use crate::domain::{Coordinates, StopRecord};

/// Optional filters and sort origin for a stop query.
///
/// Passed explicitly through the call chain; nothing here is global.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryParams {
    /// Direction name or prefix, matched case-insensitively (e.g. `"no"`).
    pub direction: Option<String>,
    /// Exact stop number.
    pub stop: Option<u32>,
    /// Latitude to sort results by. Needs `longitude` as well.
    pub latitude: Option<f64>,
    /// Longitude to sort results by. Needs `latitude` as well.
    pub longitude: Option<f64>,
}

impl QueryParams {
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn with_stop(mut self, stop: u32) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// The point to measure distances from.
    ///
    /// Only present when both coordinates are given and neither is zero; a
    /// zero coordinate is treated as "not supplied".
    pub fn origin(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Direction filter, ignoring an empty string.
    pub fn direction_filter(&self) -> Option<&str> {
        self.direction.as_deref().filter(|d| !d.is_empty())
    }

    /// Whether a stop passes the stop-number and direction filters.
    pub fn matches(&self, stop: &StopRecord) -> bool {
        let stop_ok = self.stop.is_none_or(|n| n == stop.stop_number);
        let direction_ok = self
            .direction_filter()
            .is_none_or(|d| stop.direction.matches(d));
        stop_ok && direction_ok
    }
}
