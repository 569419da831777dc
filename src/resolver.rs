use crate::models::{Direction, Station, TrainSnapshot};
use crate::topology::StationTopology;
use std::fmt;

/// Sentinel shown when an offset runs past the end of the line.
pub const END_OF_LINE: &str = "End of Line";
/// Sentinel the display layer substitutes when no resolution is available.
pub const UNKNOWN_STOP: &str = "Unknown";
/// Sentinel for an inconsistent topology: the station is known but its line
/// has no ordered view.
pub const LOOKUP_ERROR: &str = "Error";

/// The five display slots around a train, plus the next station's code for
/// the announcement collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopSequence {
    pub previous: String,
    pub current: String,
    pub next: String,
    pub next_plus_one: String,
    pub next_plus_two: String,
    pub next_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The reported position code is not in the topology; the whole
    /// resolution fails and the previous output stays on screen.
    UnknownStation(String),
    /// The current station's number is not numeric, so offset arithmetic is
    /// impossible. Isolated to this train; others resolve normally.
    MalformedNumber { code: String, number: String },
    /// The feed's direction token was not recognized; the update for this
    /// cycle is skipped outright.
    UnknownDirection(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStation(code) => write!(f, "station not found for code {code}"),
            Self::MalformedNumber { code, number } => {
                write!(f, "station {code} has non-numeric number {number:?}")
            }
            Self::UnknownDirection(raw) => write!(f, "unknown train direction {raw:?}"),
        }
    }
}

/// Resolve the surrounding stops for a raw feed snapshot.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownDirection`] for an unrecognized direction
/// token, otherwise whatever [`resolve`] returns. No variant is fatal to the
/// render loop.
pub fn resolve_snapshot(
    topology: &StationTopology,
    snapshot: &TrainSnapshot,
) -> Result<StopSequence, ResolveError> {
    let Some(direction) = Direction::parse(&snapshot.direction) else {
        return Err(ResolveError::UnknownDirection(snapshot.direction.clone()));
    };
    resolve(topology, &snapshot.position_code, direction)
}

/// Resolve the stops around `code` when traveling in `direction`.
///
/// Offsets are matched against the declared station numbers on the same
/// line, not positions in the ordered sequence, so a gap in the numbering
/// yields [`END_OF_LINE`] for the intermediate offsets. Each slot resolves
/// independently; one slot running off the line does not affect the others.
///
/// # Errors
///
/// [`ResolveError::UnknownStation`] when `code` is not in the topology and
/// [`ResolveError::MalformedNumber`] when the current station's number does
/// not parse; both fail the whole resolution for this train only.
pub fn resolve(
    topology: &StationTopology,
    code: &str,
    direction: Direction,
) -> Result<StopSequence, ResolveError> {
    let station = topology
        .get_by_code(code)
        .ok_or_else(|| ResolveError::UnknownStation(code.to_string()))?;

    let current_number: i64 =
        station
            .number
            .parse()
            .map_err(|_| ResolveError::MalformedNumber {
                code: station.code.clone(),
                number: station.number.clone(),
            })?;

    let sign = direction.sign();
    let line = topology.line(station.line_letter());

    let name_at = |offset: i64| -> String {
        let Some(line) = line else {
            return LOOKUP_ERROR.to_string();
        };
        station_at_number(line, current_number + sign * offset)
            .map_or_else(|| END_OF_LINE.to_string(), |s| s.name.clone())
    };

    let next_code = line
        .and_then(|line| station_at_number(line, current_number + sign))
        .map(|s| s.code.clone());

    Ok(StopSequence {
        previous: name_at(-1),
        current: station.name.clone(),
        next: name_at(1),
        next_plus_one: name_at(2),
        next_plus_two: name_at(3),
        next_code,
    })
}

/// Numeric match on declared numbers; stations with non-numeric numbers
/// never match an offset target.
fn station_at_number(line: &[Station], target: i64) -> Option<&Station> {
    line.iter()
        .find(|s| s.number.parse::<i64>().is_ok_and(|n| n == target))
}
