use serde::{Deserialize, Serialize};

/// Travel direction along a line's station ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Parse the feed's direction token.
    ///
    /// `None` is the explicit "unrecognized direction" outcome; callers skip
    /// the affected update for that cycle instead of guessing a direction.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "forward" => Some(Self::Forward),
            "backward" => Some(Self::Backward),
            _ => None,
        }
    }

    /// Traversal sign applied to station-number offsets.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// One train's reported state for a polling cycle, as delivered by the
/// external feed. The direction token is validated where it is consumed,
/// not here; the snapshot itself stays raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainSnapshot {
    pub train_index: usize,
    pub position_code: String,
    pub direction: String,
}
