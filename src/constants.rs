/// Interval between polls of the external train position feed (ms)
pub const TRAIN_POLL_INTERVAL_MS: u32 = 13_000;

/// Animation tick period (~60 ticks per second)
pub const ANIMATION_TICK_MS: u32 = 16;

/// Refresh period of the info panel clock (ms)
pub const CLOCK_INTERVAL_MS: u32 = 1_000;

/// Fraction of the remaining delta a marker covers per tick
pub const EASING_FACTOR: f64 = 0.15;

/// Below this remaining distance a marker snaps to its target exactly
pub const TRAIN_SNAP_DISTANCE: f64 = 3.0;

/// Ticks a marker keeps pulsing after its target moves
pub const PULSE_FRAMES: u32 = 60;

/// Minimum per-axis target change that triggers a pulse (map units)
pub const TARGET_CHANGE_THRESHOLD: f64 = 1.0;

/// Margin kept around the network when fitting it to the canvas
pub const MAP_MARGIN_FACTOR: f64 = 0.85;

/// Guards the fit scale against zero-extent networks
pub const EXTENT_EPSILON: f64 = 1e-6;

/// Pointer distance within which a station counts as hit (px)
pub const STATION_HIT_RADIUS: f64 = 15.0;

/// Pointer distance within which a train marker counts as hit (px)
pub const TRAIN_HIT_RADIUS: f64 = 10.0;

/// Station names longer than this are truncated at import
pub const MAX_STATION_NAME_LEN: usize = 50;

/// Coordinates outside this range are logged as suspicious
pub const MAX_COORDINATE: f64 = 10_000.0;

pub const STATION_DATA_URL: &str = "/data/stations.csv";
pub const POSITIONS_API: &str = "/api/positions";
