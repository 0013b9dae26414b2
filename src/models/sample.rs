// One measurement row for one device

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The collector's timestamp format. Fixed-width and zero-padded, so the
/// canonical rendering sorts lexicographically in chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a raw timestamp and re-render it in the canonical form. Returns
/// None when the input does not match the collector's format.
pub fn normalize_timestamp(raw: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

/// One timestamped measurement. `timestamp` is the canonical
/// `%Y-%m-%d %H:%M:%S` rendering produced by the loader, so lexicographic
/// order equals chronological order. A sample need not carry every known
/// metric id; absent metrics are simply not in the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: String,
    #[serde(flatten)]
    pub metrics: BTreeMap<String, f64>,
}

impl Sample {
    pub fn value(&self, metric_id: &str) -> Option<f64> {
        self.metrics.get(metric_id).copied()
    }
}
