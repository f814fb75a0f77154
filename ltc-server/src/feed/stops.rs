//! Stop feed parser.
//!
//! The WebWatch map feed is a single line of text with three levels of
//! delimiters:
//!
//! ```text
//! timestamp * main stops * info text * minor stops
//! ```
//!
//! Each stops segment is a `;`-separated list of records, and each record is
//! seven `|`-separated fields:
//!
//! ```text
//! latitude | longitude | name | direction | Stop Number N | arrivals | (unused)
//! ```
//!
//! Arrivals are `<br>`-separated `"<time> TO <destination>"` chunks.
//!
//! Only the top-level segment count is fatal. Malformed records and arrival
//! chunks are skipped so one bad entry never hides the rest of the route.

use tracing::{debug, trace};

use crate::domain::{ArrivalTime, Direction, StopRecord, title_case};

use super::error::FeedFormatError;

const SEGMENT_SEPARATOR: char = '*';
const RECORD_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = '|';
const ARRIVAL_SEPARATOR: &str = "<br>";
const DESTINATION_SEPARATOR: &str = " TO ";
const STOP_NUMBER_PREFIX: &str = "Stop Number ";

/// Number of segments the feed splits into at the top level.
const SEGMENT_COUNT: usize = 4;

/// A parsed stop feed for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct StopFeed {
    /// Provider timestamp, verbatim.
    pub timestamp: String,
    /// Free-text service notice, verbatim.
    pub info_text: String,
    /// Main stops followed by minor stops, in feed order.
    pub stops: Vec<StopRecord>,
}

impl StopFeed {
    /// Parse a raw feed for `route`.
    ///
    /// Fails only when the feed does not have exactly four top-level segments.
    pub fn parse(raw: &str, route: &str) -> Result<Self, FeedFormatError> {
        let segments: Vec<&str> = raw.split(SEGMENT_SEPARATOR).collect();
        let [timestamp, main_stops, info_text, minor_stops] = segments.as_slice() else {
            return Err(FeedFormatError::SegmentCount(segments.len()));
        };
        debug_assert_eq!(segments.len(), SEGMENT_COUNT);

        let records = format!("{main_stops}{minor_stops}");
        let mut stops = Vec::new();
        let mut skipped = 0usize;

        for candidate in records.split(RECORD_SEPARATOR) {
            match decode_record(candidate, route) {
                RecordOutcome::Parsed(stop) => stops.push(stop),
                RecordOutcome::Skipped(reason) => {
                    skipped += 1;
                    trace!(route, %reason, candidate, "skipped stop record");
                }
            }
        }

        debug!(route, parsed = stops.len(), skipped, "parsed stop feed");

        Ok(Self {
            timestamp: timestamp.to_string(),
            info_text: info_text.to_string(),
            stops,
        })
    }
}

/// Parse a raw feed for `route` into its stop records.
pub fn parse_stop_feed(raw: &str, route: &str) -> Result<Vec<StopRecord>, FeedFormatError> {
    StopFeed::parse(raw, route).map(|feed| feed.stops)
}

/// Result of decoding one candidate record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Parsed(StopRecord),
    Skipped(SkipReason),
}

/// Why a candidate record was left out of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("expected 7 fields, got {0}")]
    FieldCount(usize),
    #[error("invalid latitude")]
    Latitude,
    #[error("invalid longitude")]
    Longitude,
    #[error("invalid stop number")]
    StopNumber,
}

/// Decode one `|`-separated stop record.
pub fn decode_record(candidate: &str, route: &str) -> RecordOutcome {
    let fields: Vec<&str> = candidate.split(FIELD_SEPARATOR).collect();
    let [latitude, longitude, name, direction, stop_number, times, _] = fields.as_slice() else {
        return RecordOutcome::Skipped(SkipReason::FieldCount(fields.len()));
    };

    let Ok(latitude) = latitude.trim().parse::<f64>() else {
        return RecordOutcome::Skipped(SkipReason::Latitude);
    };
    let Ok(longitude) = longitude.trim().parse::<f64>() else {
        return RecordOutcome::Skipped(SkipReason::Longitude);
    };
    let Some(stop_number) = parse_stop_number(stop_number) else {
        return RecordOutcome::Skipped(SkipReason::StopNumber);
    };

    RecordOutcome::Parsed(StopRecord {
        latitude,
        longitude,
        name: title_case(name),
        direction: Direction::parse(direction),
        stop_number,
        arrivals: parse_arrivals(times, route),
        route: route.to_string(),
        distance: None,
    })
}

fn parse_stop_number(field: &str) -> Option<u32> {
    let field = field.trim_start();
    field
        .strip_prefix(STOP_NUMBER_PREFIX)
        .unwrap_or(field)
        .trim()
        .parse()
        .ok()
}

/// Parse the `<br>`-separated arrivals field, dropping malformed chunks.
pub fn parse_arrivals(times: &str, route: &str) -> Vec<ArrivalTime> {
    times
        .split(ARRIVAL_SEPARATOR)
        .filter_map(|chunk| parse_arrival(chunk, route))
        .collect()
}

fn parse_arrival(chunk: &str, route: &str) -> Option<ArrivalTime> {
    let parts: Vec<&str> = chunk.split(DESTINATION_SEPARATOR).collect();
    let [time, destination] = parts.as_slice() else {
        return None;
    };

    let (arrival_route, destination) = split_route_override(destination.trim(), route);

    Some(ArrivalTime {
        time: time.to_string(),
        destination: title_case(destination),
        route: arrival_route.to_string(),
    })
}

/// Peel a branch identifier off the front of a destination.
///
/// The provider sometimes writes the serving branch ahead of the destination,
/// e.g. `"2A DOWNTOWN"` on route `"2"`. When the destination starts with the
/// route identifier, its first word is taken as the arrival's route and the
/// remainder as the destination. Otherwise the route is returned unchanged.
///
/// This depends on provider text formatting and may misfire on destinations
/// that happen to begin with the route's digits.
pub fn split_route_override<'a>(destination: &'a str, route: &'a str) -> (&'a str, &'a str) {
    if !route.is_empty()
        && destination.starts_with(route)
        && let Some((token, rest)) = destination.split_once(' ')
    {
        return (token, rest.trim_start());
    }

    (route, destination)
}
