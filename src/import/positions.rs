use crate::models::TrainSnapshot;

/// Parse a position feed payload into snapshots.
///
/// The payload is the simulator's newest output file: a header row followed
/// by `train,station,direction` rows. Malformed rows are dropped; row order
/// is preserved so slot indices stay aligned between polling cycles.
#[must_use]
pub fn parse_positions(content: &str) -> Vec<TrainSnapshot> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut snapshots = Vec::new();
    for record in reader.records() {
        let Ok(row) = record else { continue };
        let Some(snapshot) = parse_position_row(&row) else {
            continue;
        };
        snapshots.push(snapshot);
    }
    snapshots
}

fn parse_position_row(row: &csv::StringRecord) -> Option<TrainSnapshot> {
    let train_index = row.get(0)?.parse::<usize>().ok()?;
    let position_code = row.get(1)?;
    if position_code.is_empty() {
        return None;
    }
    let direction = row.get(2)?;

    Some(TrainSnapshot {
        train_index,
        position_code: position_code.to_string(),
        direction: direction.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let payload = "Train,Station,Direction\n\
                       0,R02,forward\n\
                       1,G05,backward\n";
        let snapshots = parse_positions(payload);

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].train_index, 0);
        assert_eq!(snapshots[0].position_code, "R02");
        assert_eq!(snapshots[0].direction, "forward");
        assert_eq!(snapshots[1].position_code, "G05");
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let payload = "Train,Station,Direction\n\
                       zero,R02,forward\n\
                       1,,forward\n\
                       2,B03\n\
                       3,B04,backward\n";
        let snapshots = parse_positions(payload);

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].train_index, 3);
        assert_eq!(snapshots[0].position_code, "B04");
    }

    #[test]
    fn test_direction_token_is_passed_through_raw() {
        // Validation happens at ingest, so an unknown token survives parsing.
        let payload = "Train,Station,Direction\n0,R02,sideways\n";
        let snapshots = parse_positions(payload);

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].direction, "sideways");
    }

    #[test]
    fn test_empty_payload() {
        assert!(parse_positions("").is_empty());
        assert!(parse_positions("Train,Station,Direction\n").is_empty());
    }
}
