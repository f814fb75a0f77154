//! Stop queries: filtering by stop number and direction, ranking by distance.

mod params;
mod rank;

pub use params::QueryParams;
pub use rank::filter_and_rank;
