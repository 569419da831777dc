use crate::constants::{EASING_FACTOR, PULSE_FRAMES, TARGET_CHANGE_THRESHOLD, TRAIN_SNAP_DISTANCE};
use crate::models::{Direction, TrainSnapshot};
use crate::topology::StationTopology;
use leptos::logging;

// Pulse fade: alpha oscillates around a base while the window is active.
const PULSE_BASE_ALPHA: f64 = 0.7;
const PULSE_WAVE_ALPHA: f64 = 0.3;
const PULSE_WAVE_STEP: f64 = 0.3;

/// One tracked marker. Positions are network coordinates; the map transform
/// is applied only at render time, never to this state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedTrain {
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub direction: Direction,
    pulse_frames_remaining: u32,
}

impl AnimatedTrain {
    /// A fresh idle marker: position and target coincide, no pulse.
    #[must_use]
    pub fn at(x: f64, y: f64, direction: Direction) -> Self {
        Self {
            x,
            y,
            target_x: x,
            target_y: y,
            direction,
            pulse_frames_remaining: 0,
        }
    }

    /// Adopt a new target and direction. A pulse window starts only when the
    /// target actually moved beyond the change threshold; the target itself
    /// is overwritten either way.
    pub fn set_target(&mut self, x: f64, y: f64, direction: Direction) {
        if (self.target_x - x).abs() > TARGET_CHANGE_THRESHOLD
            || (self.target_y - y).abs() > TARGET_CHANGE_THRESHOLD
        {
            self.pulse_frames_remaining = PULSE_FRAMES;
        }
        self.target_x = x;
        self.target_y = y;
        self.direction = direction;
    }

    /// Advance one frame.
    ///
    /// Movement is exponential-decay easing: each tick covers a fixed
    /// fraction of the remaining delta, so the marker decelerates into its
    /// target instead of moving at constant speed. Once the remaining
    /// distance drops under the snap threshold the position is set exactly,
    /// which bounds convergence and rules out an asymptotic crawl.
    pub fn tick(&mut self) {
        let dx = self.target_x - self.x;
        let dy = self.target_y - self.y;
        if dx.hypot(dy) < TRAIN_SNAP_DISTANCE {
            self.x = self.target_x;
            self.y = self.target_y;
        } else {
            self.x += dx * EASING_FACTOR;
            self.y += dy * EASING_FACTOR;
        }
        self.pulse_frames_remaining = self.pulse_frames_remaining.saturating_sub(1);
    }

    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulse_frames_remaining > 0
    }

    /// Marker opacity: a sinusoid of the remaining pulse frames while the
    /// window is active, full opacity once it has expired.
    #[must_use]
    pub fn pulse_alpha(&self) -> f64 {
        if self.pulse_frames_remaining == 0 {
            1.0
        } else {
            PULSE_BASE_ALPHA
                + PULSE_WAVE_ALPHA * (f64::from(self.pulse_frames_remaining) * PULSE_WAVE_STEP).sin()
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.x == self.target_x && self.y == self.target_y && !self.is_pulsing()
    }
}

/// All tracked markers.
///
/// The slot count always mirrors the feed's train count: a count change
/// discards every slot and restarts from the reported stations (hard reset,
/// no animation across the resync); a matching count updates slots in place
/// by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainAnimator {
    trains: Vec<AnimatedTrain>,
}

impl TrainAnimator {
    #[must_use]
    pub fn trains(&self) -> &[AnimatedTrain] {
        &self.trains
    }

    /// Advance every marker one frame. Cheap and idempotent at the target.
    pub fn tick(&mut self) {
        for train in &mut self.trains {
            train.tick();
        }
    }

    /// Apply one polling cycle's snapshots.
    ///
    /// Unknown station codes and unrecognized direction tokens leave the
    /// affected slot's target untouched for this cycle; the marker keeps
    /// heading for its previous target.
    pub fn ingest(&mut self, snapshots: &[TrainSnapshot], topology: &StationTopology) {
        if snapshots.len() != self.trains.len() {
            self.rebuild(snapshots, topology);
            return;
        }

        for (slot, snapshot) in snapshots.iter().enumerate() {
            let Some(direction) = Direction::parse(&snapshot.direction) else {
                logging::warn!(
                    "train {}: unknown direction {:?}, skipping update",
                    snapshot.train_index,
                    snapshot.direction
                );
                continue;
            };
            let Some(station) = topology.get_by_code(&snapshot.position_code) else {
                logging::warn!(
                    "train {}: unknown station code {}",
                    snapshot.train_index,
                    snapshot.position_code
                );
                continue;
            };
            self.trains[slot].set_target(station.x, station.y, direction);
        }
    }

    /// Hard reset: fresh idle slots at each train's reported station.
    /// Trains whose code is unknown get no slot until the feed reports a
    /// resolvable position. A direction that fails to parse defaults to
    /// forward until the next valid report; the marker is idle anyway.
    fn rebuild(&mut self, snapshots: &[TrainSnapshot], topology: &StationTopology) {
        self.trains = snapshots
            .iter()
            .filter_map(|snapshot| {
                let station = topology.get_by_code(&snapshot.position_code)?;
                let direction =
                    Direction::parse(&snapshot.direction).unwrap_or(Direction::Forward);
                Some(AnimatedTrain::at(station.x, station.y, direction))
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Station;

    fn snapshot(index: usize, code: &str, direction: &str) -> TrainSnapshot {
        TrainSnapshot {
            train_index: index,
            position_code: code.to_string(),
            direction: direction.to_string(),
        }
    }

    fn topology() -> StationTopology {
        let mut topology = StationTopology::default();
        for (code, number, x) in [("R01", "1", 0.0), ("R02", "2", 100.0), ("R03", "3", 200.0)] {
            topology.add_station(Station {
                name: format!("{code} Name"),
                code: code.to_string(),
                number: number.to_string(),
                x,
                y: 0.0,
            });
        }
        topology
    }

    #[test]
    fn test_tick_converges_exactly_without_overshoot() {
        let mut train = AnimatedTrain::at(0.0, 0.0, Direction::Forward);
        train.set_target(100.0, 0.0, Direction::Forward);

        let mut previous_distance = 100.0;
        let mut ticks = 0;
        while train.x != train.target_x || train.y != train.target_y {
            train.tick();
            ticks += 1;
            let distance = (train.target_x - train.x).hypot(train.target_y - train.y);
            assert!(distance <= previous_distance, "marker moved away from target");
            assert!(train.x <= 100.0, "marker overshot its target");
            assert!(ticks < 120, "marker failed to converge");
            previous_distance = distance;
        }

        assert_eq!((train.x, train.y), (100.0, 0.0));
        assert_eq!(train.x, train.target_x);
    }

    #[test]
    fn test_tick_is_idempotent_at_target() {
        let mut train = AnimatedTrain::at(50.0, 50.0, Direction::Forward);
        train.tick();
        assert_eq!((train.x, train.y), (50.0, 50.0));
    }

    #[test]
    fn test_pulse_lifecycle() {
        let mut train = AnimatedTrain::at(0.0, 0.0, Direction::Forward);
        train.set_target(100.0, 0.0, Direction::Forward);
        assert!(train.is_pulsing());

        for tick in 0..60 {
            assert!(train.is_pulsing(), "pulse ended early at tick {tick}");
            assert!(train.pulse_alpha() < 1.0 + 1e-9);
            train.tick();
        }

        assert!(!train.is_pulsing());
        assert_eq!(train.pulse_alpha(), 1.0);

        // And it stays off.
        train.tick();
        assert!(!train.is_pulsing());
        assert_eq!(train.pulse_alpha(), 1.0);
    }

    #[test]
    fn test_small_target_change_does_not_pulse() {
        let mut train = AnimatedTrain::at(10.0, 10.0, Direction::Forward);
        train.set_target(10.5, 10.5, Direction::Backward);

        assert!(!train.is_pulsing());
        // The target and direction are still adopted.
        assert_eq!((train.target_x, train.target_y), (10.5, 10.5));
        assert_eq!(train.direction, Direction::Backward);
    }

    #[test]
    fn test_ingest_builds_slots_on_first_batch() {
        let topology = topology();
        let mut animator = TrainAnimator::default();

        animator.ingest(
            &[snapshot(0, "R01", "forward"), snapshot(1, "R03", "backward")],
            &topology,
        );

        assert_eq!(animator.trains().len(), 2);
        assert!(animator.trains().iter().all(AnimatedTrain::is_idle));
        assert_eq!(animator.trains()[0].x, 0.0);
        assert_eq!(animator.trains()[1].x, 200.0);
    }

    #[test]
    fn test_ingest_updates_slots_in_place() {
        let topology = topology();
        let mut animator = TrainAnimator::default();
        animator.ingest(&[snapshot(0, "R01", "forward")], &topology);

        animator.ingest(&[snapshot(0, "R02", "forward")], &topology);

        let train = &animator.trains()[0];
        assert_eq!(train.x, 0.0, "position animates, it does not jump");
        assert_eq!(train.target_x, 100.0);
        assert!(train.is_pulsing());
    }

    #[test]
    fn test_count_change_forces_hard_reset() {
        let topology = topology();
        let mut animator = TrainAnimator::default();
        animator.ingest(&[snapshot(0, "R01", "forward")], &topology);

        animator.ingest(
            &[snapshot(0, "R02", "forward"), snapshot(1, "R03", "backward")],
            &topology,
        );

        assert_eq!(animator.trains().len(), 2);
        // No animation across a resync: slots start idle at the new stations.
        assert!(animator.trains().iter().all(AnimatedTrain::is_idle));
        assert_eq!(animator.trains()[0].x, 100.0);
    }

    #[test]
    fn test_bad_rows_leave_existing_targets_alone() {
        let topology = topology();
        let mut animator = TrainAnimator::default();
        animator.ingest(
            &[snapshot(0, "R01", "forward"), snapshot(1, "R02", "forward")],
            &topology,
        );

        animator.ingest(
            &[snapshot(0, "R99", "forward"), snapshot(1, "R02", "sideways")],
            &topology,
        );

        assert_eq!(animator.trains()[0].target_x, 0.0);
        assert_eq!(animator.trains()[1].target_x, 100.0);
    }
}
