//! Parsers for the WebWatch pages.
//!
//! The provider has no API; route listings come from an HTML page and stop
//! data from a delimiter-encoded text feed. Both parsers are pure functions
//! of their input text.

mod directory;
mod error;
mod stops;

pub use directory::{parse_route_directory, parse_route_summaries};
pub use error::FeedFormatError;
pub use stops::{
    RecordOutcome, SkipReason, StopFeed, decode_record, parse_arrivals, parse_stop_feed,
    split_route_override,
};
