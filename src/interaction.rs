use crate::animator::AnimatedTrain;
use crate::constants::{STATION_HIT_RADIUS, TRAIN_HIT_RADIUS};
use crate::models::Station;
use crate::transform::MapTransform;

/// Index of the station nearest to a pointer position, if any lies within
/// the station hit radius. When several candidates are in range the closest
/// one wins, and identical queries always return the same answer.
#[must_use]
pub fn find_station_at(
    point: (f64, f64),
    stations: &[Station],
    transform: &MapTransform,
) -> Option<usize> {
    nearest_within(
        point,
        stations.iter().map(|s| transform.project(s.x, s.y)),
        STATION_HIT_RADIUS,
    )
}

/// Index of the train marker nearest to a pointer position within the train
/// hit radius.
#[must_use]
pub fn find_train_at(
    point: (f64, f64),
    trains: &[AnimatedTrain],
    transform: &MapTransform,
) -> Option<usize> {
    nearest_within(
        point,
        trains.iter().map(|t| transform.project(t.x, t.y)),
        TRAIN_HIT_RADIUS,
    )
}

fn nearest_within(
    point: (f64, f64),
    candidates: impl Iterator<Item = (f64, f64)>,
    threshold: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, (x, y)) in candidates.enumerate() {
        let distance = (point.0 - x).hypot(point.1 - y);
        // Strict comparison keeps the first of two exact ties, so repeated
        // queries stay deterministic.
        if distance <= threshold && best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    fn station(code: &str, x: f64, y: f64) -> Station {
        Station {
            name: code.to_string(),
            code: code.to_string(),
            number: "1".to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_miss_beyond_threshold() {
        let stations = vec![station("R01", 100.0, 100.0)];
        let transform = MapTransform::IDENTITY;

        assert_eq!(find_station_at((200.0, 200.0), &stations, &transform), None);
        assert_eq!(
            find_station_at((100.0, 100.0 + STATION_HIT_RADIUS + 1.0), &stations, &transform),
            None
        );
    }

    #[test]
    fn test_hit_within_threshold() {
        let stations = vec![station("R01", 100.0, 100.0)];
        let transform = MapTransform::IDENTITY;

        assert_eq!(
            find_station_at((105.0, 100.0), &stations, &transform),
            Some(0)
        );
    }

    #[test]
    fn test_nearest_candidate_wins() {
        let stations = vec![station("R01", 100.0, 100.0), station("R02", 110.0, 100.0)];
        let transform = MapTransform::IDENTITY;

        // Both stations are in range; the second is closer.
        assert_eq!(
            find_station_at((108.0, 100.0), &stations, &transform),
            Some(1)
        );
        assert_eq!(
            find_station_at((102.0, 100.0), &stations, &transform),
            Some(0)
        );
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let stations = vec![station("R01", 100.0, 100.0), station("R02", 110.0, 100.0)];
        let transform = MapTransform::IDENTITY;

        // Exactly between two candidates: the first in station order wins,
        // every time.
        let first = find_station_at((105.0, 100.0), &stations, &transform);
        for _ in 0..10 {
            assert_eq!(find_station_at((105.0, 100.0), &stations, &transform), first);
        }
        assert_eq!(first, Some(0));
    }

    #[test]
    fn test_train_hit_uses_its_own_threshold() {
        let trains = vec![AnimatedTrain::at(100.0, 100.0, Direction::Forward)];
        let transform = MapTransform::IDENTITY;

        assert_eq!(find_train_at((105.0, 100.0), &trains, &transform), Some(0));
        assert_eq!(
            find_train_at((100.0, 100.0 + TRAIN_HIT_RADIUS + 1.0), &trains, &transform),
            None
        );
    }
}
