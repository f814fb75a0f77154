//! Stop and arrival records.

use std::fmt;

use serde::{Serialize, Serializer};

use super::location::{Coordinates, Distance};
use super::text::title_case;

/// Direction of travel served by a stop.
///
/// The upstream feed spells these in arbitrary case. Anything that is not one
/// of the four compass directions is kept as [`Direction::Other`] rather than
/// rejected, so an unexpected label never drops a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
    /// Unrecognized label, stored title-cased.
    Other(String),
}

impl Direction {
    /// Parse a direction label, ignoring case and surrounding whitespace.
    pub fn parse(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        match lower.as_str() {
            "north" => Direction::North,
            "east" => Direction::East,
            "south" => Direction::South,
            "west" => Direction::West,
            _ => Direction::Other(title_case(label.trim())),
        }
    }

    /// Title-cased display name, e.g. `"North"`.
    pub fn as_str(&self) -> &str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::Other(label) => label,
        }
    }

    /// Whether a caller-supplied direction (or prefix of one) selects this
    /// direction. Comparison is case-insensitive, so `"no"` matches North.
    pub fn matches(&self, query: &str) -> bool {
        let own = self.as_str().to_lowercase();
        let query = query.to_lowercase();
        own.starts_with(&query) || own == query
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One predicted or scheduled arrival at a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrivalTime {
    /// Time as given by the provider (usually `HH:MM`, sometimes with a suffix).
    pub time: String,
    /// Title-cased destination.
    pub destination: String,
    /// Route serving this arrival. Differs from the stop's route when the
    /// provider embedded a branch identifier in the destination text.
    pub route: String,
}

/// A stop on a route together with its upcoming arrivals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Title-cased stop name.
    pub name: String,
    pub direction: Direction,
    /// Provider stop number. Unique within one route's feed only.
    #[serde(rename = "number")]
    pub stop_number: u32,
    /// Arrivals in feed order.
    #[serde(rename = "times")]
    pub arrivals: Vec<ArrivalTime>,
    /// Route whose feed this stop came from.
    pub route: String,
    /// Distance from the caller's location, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
}

impl StopRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Distance in meters, if computed.
    pub fn distance_meters(&self) -> Option<f64> {
        self.distance.map(|d| d.meters)
    }
}
