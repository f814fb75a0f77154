//! Geographic points and distances.

use geo::{GeodesicDistance, Point};
use serde::Serialize;

/// Meters in one statute mile.
const METERS_PER_MILE: f64 = 1609.344;

/// A WGS-84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    fn to_point(self) -> Point<f64> {
        // geo points are (x = longitude, y = latitude)
        Point::new(self.longitude, self.latitude)
    }
}

/// Distance between two points, in both metric and imperial units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Distance {
    pub meters: f64,
    pub miles: f64,
}

impl Distance {
    pub fn from_meters(meters: f64) -> Self {
        Self {
            meters,
            miles: meters / METERS_PER_MILE,
        }
    }
}

/// Geodesic distance between two points on the WGS-84 ellipsoid.
pub fn distance(a: Coordinates, b: Coordinates) -> Distance {
    Distance::from_meters(a.to_point().geodesic_distance(&b.to_point()))
}
