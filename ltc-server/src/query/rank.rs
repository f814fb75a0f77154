//! Stop filtering and distance ranking.

use crate::domain::{StopRecord, distance};

use super::params::QueryParams;

/// Filter stops by the query and, when it carries a location, rank by distance.
///
/// Kept stops retain feed order unless a location was given, in which case
/// each gets a distance and the list is sorted nearest-first. The sort is
/// stable, so stops at the same distance keep their feed order.
pub fn filter_and_rank(stops: Vec<StopRecord>, params: &QueryParams) -> Vec<StopRecord> {
    let origin = params.origin();

    let mut kept: Vec<StopRecord> = stops
        .into_iter()
        .filter(|stop| params.matches(stop))
        .map(|mut stop| {
            if let Some(origin) = origin {
                stop.distance = Some(distance(stop.coordinates(), origin));
            }
            stop
        })
        .collect();

    if origin.is_some() {
        kept.sort_by(|a, b| {
            let a = a.distance_meters().unwrap_or(f64::INFINITY);
            let b = b.distance_meters().unwrap_or(f64::INFINITY);
            a.total_cmp(&b)
        });
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArrivalTime, Direction};

    fn stop(number: u32, direction: Direction, lat: f64, lon: f64) -> StopRecord {
        StopRecord {
            latitude: lat,
            longitude: lon,
            name: format!("Stop {number}"),
            direction,
            stop_number: number,
            arrivals: vec![ArrivalTime {
                time: "08:00".to_string(),
                destination: "Downtown".to_string(),
                route: "2".to_string(),
            }],
            route: "2".to_string(),
            distance: None,
        }
    }

    fn numbers(stops: &[StopRecord]) -> Vec<u32> {
        stops.iter().map(|s| s.stop_number).collect()
    }

    fn sample() -> Vec<StopRecord> {
        vec![
            stop(1, Direction::North, 43.00, -81.25),
            stop(2, Direction::South, 42.95, -81.20),
            stop(3, Direction::North, 42.99, -81.24),
            stop(4, Direction::East, 42.90, -81.30),
        ]
    }

    #[test]
    fn no_params_keeps_everything_in_order() {
        let result = filter_and_rank(sample(), &QueryParams::default());
        assert_eq!(numbers(&result), vec![1, 2, 3, 4]);
        assert!(result.iter().all(|s| s.distance.is_none()));
    }

    #[test]
    fn stop_filter() {
        let result = filter_and_rank(sample(), &QueryParams::default().with_stop(3));
        assert_eq!(numbers(&result), vec![3]);
    }

    #[test]
    fn unknown_stop_gives_empty_result() {
        let result = filter_and_rank(sample(), &QueryParams::default().with_stop(6));
        assert!(result.is_empty());
    }

    #[test]
    fn direction_prefix_filter() {
        let result = filter_and_rank(sample(), &QueryParams::default().with_direction("No"));
        assert_eq!(numbers(&result), vec![1, 3]);
    }

    #[test]
    fn sorts_by_distance_from_location() {
        // Right on top of stop 3.
        let params = QueryParams::default().with_location(42.99, -81.24);
        let result = filter_and_rank(sample(), &params);

        assert_eq!(numbers(&result), vec![3, 1, 2, 4]);
        assert!(result[0].distance_meters().unwrap() < 1e-6);
        for pair in result.windows(2) {
            assert!(pair[0].distance_meters() <= pair[1].distance_meters());
        }
    }

    #[test]
    fn filters_apply_before_ranking() {
        let params = QueryParams::default()
            .with_direction("north")
            .with_location(42.99, -81.24);
        let result = filter_and_rank(sample(), &params);
        assert_eq!(numbers(&result), vec![3, 1]);
    }

    #[test]
    fn single_coordinate_skips_ranking() {
        let params = QueryParams {
            latitude: Some(42.99),
            ..Default::default()
        };
        let result = filter_and_rank(sample(), &params);
        assert_eq!(numbers(&result), vec![1, 2, 3, 4]);
        assert!(result.iter().all(|s| s.distance.is_none()));
    }

    #[test]
    fn zero_coordinates_skip_ranking() {
        let params = QueryParams::default().with_location(0.0, 0.0);
        let result = filter_and_rank(sample(), &params);
        assert_eq!(numbers(&result), vec![1, 2, 3, 4]);
        assert!(result.iter().all(|s| s.distance.is_none()));
    }

    #[test]
    fn equal_distances_keep_feed_order() {
        let stops = vec![
            stop(7, Direction::West, 42.95, -81.20),
            stop(8, Direction::West, 43.10, -81.10),
            stop(9, Direction::West, 42.95, -81.20),
        ];
        let params = QueryParams::default().with_location(42.95, -81.21);
        let result = filter_and_rank(stops, &params);
        assert_eq!(numbers(&result), vec![7, 9, 8]);
    }

    #[test]
    fn empty_input() {
        let params = QueryParams::default().with_location(42.95, -81.21);
        assert!(filter_and_rank(Vec::new(), &params).is_empty());
    }
}
