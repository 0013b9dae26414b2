// Performance CSV parsing. The collector writes unquoted comma-only rows:
// a timestamp column plus one numeric column per metric, header first.

use std::collections::BTreeMap;

use crate::models::{Sample, normalize_timestamp};

pub(super) const TIMESTAMP_COLUMN: &str = "timestamp";

/// Column names from the header line. None if the timestamp column is
/// missing, which makes the whole file unusable.
pub(super) fn parse_header(line: &str) -> Option<Vec<String>> {
    let columns: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();
    if columns.iter().any(|c| c == TIMESTAMP_COLUMN) {
        Some(columns)
    } else {
        None
    }
}

/// One data row -> Sample. None means the row is malformed: wrong column
/// count, unparseable timestamp, or a non-empty cell that is not numeric.
/// An empty cell is not malformed; the metric is simply absent from this
/// sample.
pub(super) fn parse_row(header: &[String], line: &str) -> Option<Sample> {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    if cells.len() != header.len() {
        return None;
    }

    let mut timestamp = None;
    let mut metrics = BTreeMap::new();
    for (column, cell) in header.iter().zip(&cells) {
        if column == TIMESTAMP_COLUMN {
            timestamp = Some(normalize_timestamp(cell)?);
        } else if !cell.is_empty() {
            metrics.insert(column.clone(), cell.parse::<f64>().ok()?);
        }
    }

    Some(Sample {
        timestamp: timestamp?,
        metrics,
    })
}
