use crate::constants::{MAX_COORDINATE, MAX_STATION_NAME_LEN};
use crate::models::Station;
use crate::topology::StationTopology;
use leptos::logging;

/// Outcome counters for a station import, reported back for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub loaded: usize,
    pub skipped: usize,
}

/// Parse the station data file into a topology.
///
/// Expected columns after the header row: row index (ignored), line letter,
/// station number, station code, station name, x, y. Rows that fail
/// validation are skipped and counted without affecting the rest of the
/// file; a file that yields zero stations leaves an empty topology, which
/// the caller reports but keeps running with.
#[must_use]
pub fn parse_station_csv(content: &str) -> (StationTopology, ImportStats) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut topology = StationTopology::default();
    let mut stats = ImportStats::default();

    for (index, record) in reader.records().enumerate() {
        // Line number in the source file, counting the header.
        let line_number = index + 2;
        let Ok(row) = record else {
            stats.skipped += 1;
            continue;
        };
        if row.iter().all(str::is_empty) {
            continue;
        }
        match parse_station_row(&row) {
            Some(station) => {
                if topology.add_station(station) {
                    stats.loaded += 1;
                } else {
                    // Duplicate code: first occurrence wins, silently.
                    stats.skipped += 1;
                }
            }
            None => {
                logging::warn!("skipping malformed station row at line {line_number}");
                stats.skipped += 1;
            }
        }
    }

    (topology, stats)
}

fn parse_station_row(row: &csv::StringRecord) -> Option<Station> {
    if row.len() < 7 {
        return None;
    }

    let code = row.get(3)?;
    if !is_valid_station_code(code) {
        return None;
    }

    let number = row.get(2)?;
    if number.is_empty() {
        return None;
    }

    let mut name = row.get(4)?.to_string();
    if name.is_empty() {
        return None;
    }
    if name.chars().count() > MAX_STATION_NAME_LEN {
        name = name.chars().take(MAX_STATION_NAME_LEN).collect();
    }

    let x = row.get(5)?.parse::<f64>().ok()?;
    let y = row.get(6)?.parse::<f64>().ok()?;
    if !(0.0..=MAX_COORDINATE).contains(&x) || !(0.0..=MAX_COORDINATE).contains(&y) {
        logging::warn!("suspicious coordinates for {code}: ({x}, {y})");
    }

    Some(Station {
        name,
        code: code.to_string(),
        number: number.to_string(),
        x,
        y,
    })
}

/// Station codes are a single uppercase line letter followed by two digits.
#[must_use]
pub fn is_valid_station_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 3
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_file_loads_all_rows() {
        let content = "Row,Line,Number,Code,Name,X,Y\n\
                       1,R,1,R01,Alpha,100,200\n\
                       2,R,2,R02,Beta,150,250\n";
        let (topology, stats) = parse_station_csv(content);

        assert_eq!(stats, ImportStats { loaded: 2, skipped: 0 });
        assert_eq!(topology.len(), 2);

        let alpha = topology.get_by_code("R01").expect("R01 should load");
        assert_eq!(alpha.name, "Alpha");
        assert_eq!(alpha.number, "1");
        assert_eq!((alpha.x, alpha.y), (100.0, 200.0));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let content = "Row,Line,Number,Code,Name,X,Y\n\
                       1,R,1,R01,Alpha\n\
                       2,R,2,R02,Beta,150,250\n";
        let (topology, stats) = parse_station_csv(content);

        assert_eq!(stats, ImportStats { loaded: 1, skipped: 1 });
        assert!(topology.get_by_code("R01").is_none());
        assert!(topology.get_by_code("R02").is_some());
    }

    #[test]
    fn test_invalid_codes_are_skipped() {
        let content = "Row,Line,Number,Code,Name,X,Y\n\
                       1,R,1,r01,Alpha,100,200\n\
                       2,R,2,R2,Beta,150,250\n\
                       3,R,3,R033,Gamma,170,250\n\
                       4,R,4,R04,Delta,190,250\n";
        let (topology, stats) = parse_station_csv(content);

        assert_eq!(stats, ImportStats { loaded: 1, skipped: 3 });
        assert!(topology.get_by_code("R04").is_some());
    }

    #[test]
    fn test_unparseable_coordinates_are_skipped() {
        let content = "Row,Line,Number,Code,Name,X,Y\n\
                       1,R,1,R01,Alpha,abc,200\n\
                       2,R,2,R02,Beta,150,250\n";
        let (_, stats) = parse_station_csv(content);

        assert_eq!(stats, ImportStats { loaded: 1, skipped: 1 });
    }

    #[test]
    fn test_duplicate_codes_keep_first_occurrence() {
        let content = "Row,Line,Number,Code,Name,X,Y\n\
                       1,R,1,R01,First,100,200\n\
                       2,R,9,R01,Second,900,900\n";
        let (topology, stats) = parse_station_csv(content);

        assert_eq!(stats, ImportStats { loaded: 1, skipped: 1 });
        assert_eq!(
            topology.get_by_code("R01").map(|s| s.name.as_str()),
            Some("First")
        );
    }

    #[test]
    fn test_long_names_are_truncated_not_rejected() {
        let long_name = "X".repeat(80);
        let content =
            format!("Row,Line,Number,Code,Name,X,Y\n1,R,1,R01,{long_name},100,200\n");
        let (topology, stats) = parse_station_csv(&content);

        assert_eq!(stats.loaded, 1);
        let station = topology.get_by_code("R01").expect("R01 should load");
        assert_eq!(station.name.chars().count(), MAX_STATION_NAME_LEN);
    }

    #[test]
    fn test_empty_input_yields_empty_topology() {
        let (topology, stats) = parse_station_csv("");
        assert!(topology.is_empty());
        assert_eq!(stats, ImportStats::default());

        let (topology, _) = parse_station_csv("Row,Line,Number,Code,Name,X,Y\n");
        assert!(topology.is_empty());
    }

    #[test]
    fn test_station_code_pattern() {
        assert!(is_valid_station_code("R01"));
        assert!(is_valid_station_code("G12"));
        assert!(is_valid_station_code("Z99"));

        assert!(!is_valid_station_code("r01"));
        assert!(!is_valid_station_code("R1"));
        assert!(!is_valid_station_code("R012"));
        assert!(!is_valid_station_code("1R0"));
        assert!(!is_valid_station_code(""));
    }

    #[test]
    fn test_fixture_network_loads() {
        let content = include_str!("../../test-data/stations.csv");
        let (topology, stats) = parse_station_csv(content);

        assert_eq!(stats.skipped, 0);
        assert_eq!(topology.len(), stats.loaded);
        assert_eq!(topology.lines_view().len(), 3);
        assert!(topology.get_by_code("R01").is_some());
    }
}
