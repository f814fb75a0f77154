//! Domain types for the bus arrival API.
//!
//! Everything here is built fresh from upstream text on each request and
//! never mutated afterwards, apart from the distance attached by the ranker.

mod location;
mod route;
mod stop;
mod text;

pub use location::{Coordinates, Distance, distance};
pub use route::{RouteDirectory, RouteSummary, into_directory};
pub use stop::{ArrivalTime, Direction, StopRecord};
pub use text::title_case;
