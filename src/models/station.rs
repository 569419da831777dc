use serde::{Deserialize, Serialize};

/// A single stop on the network, created once from the station data file.
///
/// `number` is kept as the raw token from the source data. Ordering and
/// neighbor lookup parse it on demand, so a non-numeric token stays a defined
/// failure mode of the affected lookup instead of a load-time error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub code: String,
    pub number: String,
    pub x: f64,
    pub y: f64,
}

impl Station {
    /// The line letter is the first character of the station code.
    #[must_use]
    pub fn line_letter(&self) -> char {
        self.code.chars().next().unwrap_or('?')
    }
}
