use crate::models::Station;
use indexmap::IndexMap;
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::collections::HashMap;

/// The station network: a deduplicated flat store plus a per-line ordered
/// view derived from it.
///
/// Lookups by code go through an index built at insertion time, so the hot
/// per-tick paths never scan the station list. The per-line view is computed
/// lazily and cached; any mutation of the station set drops the cache. In
/// normal operation the set is built once at startup and never changes, but
/// the API does not rely on that.
#[derive(Debug, Clone, Default)]
pub struct StationTopology {
    stations: Vec<Station>,
    by_code: HashMap<String, usize>,
    lines: OnceCell<IndexMap<char, Vec<Station>>>,
}

impl StationTopology {
    /// Add a station unless its code is already present (first wins).
    /// Returns whether the station was accepted.
    pub fn add_station(&mut self, station: Station) -> bool {
        if self.by_code.contains_key(&station.code) {
            return false;
        }
        self.by_code.insert(station.code.clone(), self.stations.len());
        self.stations.push(station);
        self.lines = OnceCell::new();
        true
    }

    #[must_use]
    pub fn get_by_code(&self, code: &str) -> Option<&Station> {
        self.by_code.get(code).map(|&index| &self.stations[index])
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Ordered station sequences keyed by line letter, in first-seen line
    /// order. Each sequence is sorted ascending by station number: numeric
    /// tokens first, then non-numeric tokens lexicographically.
    pub fn lines_view(&self) -> &IndexMap<char, Vec<Station>> {
        self.lines.get_or_init(|| {
            let mut lines: IndexMap<char, Vec<Station>> = IndexMap::new();
            for station in &self.stations {
                lines
                    .entry(station.line_letter())
                    .or_default()
                    .push(station.clone());
            }
            for sequence in lines.values_mut() {
                sequence.sort_by(|a, b| compare_station_numbers(&a.number, &b.number));
            }
            lines
        })
    }

    /// Stations of one line in travel order.
    #[must_use]
    pub fn line(&self, letter: char) -> Option<&[Station]> {
        self.lines_view().get(&letter).map(Vec::as_slice)
    }
}

/// Numeric tokens sort before non-numeric ones; two non-numeric tokens fall
/// back to lexicographic order.
fn compare_station_numbers(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
