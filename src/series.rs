// Pure series operations: time-range filtering, multi-series alignment and
// summary statistics. Artifact I/O stays in artifact_repo; everything here
// is a function of its inputs only, so requests never share mutable state.

use std::collections::{BTreeSet, HashMap};

use crate::error::ApiError;
use crate::models::{AlignedSeries, DeviceSeries, MetricSummary, Sample, normalize_timestamp};

/// Chart palette. Assignment is a pure function of series position so
/// repeated queries with the same device set render identically.
const PALETTE: [&str; 8] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#9c755f",
];

pub fn palette_color(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

/// Restrict samples to the inclusive [start, end] window. With no bounds
/// the input comes back unchanged. Preserves the loader's ascending order
/// and is idempotent for fixed bounds.
pub fn filter_by_time(
    samples: &[Sample],
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Vec<Sample>, ApiError> {
    let start = start.map(parse_bound).transpose()?;
    let end = end.map(parse_bound).transpose()?;
    if let (Some(s), Some(e)) = (&start, &end)
        && s > e
    {
        return Err(ApiError::InvalidRange(format!(
            "start {} is after end {}",
            s, e
        )));
    }

    Ok(samples
        .iter()
        .filter(|sample| {
            start
                .as_deref()
                .is_none_or(|s| sample.timestamp.as_str() >= s)
                && end.as_deref().is_none_or(|e| sample.timestamp.as_str() <= e)
        })
        .cloned()
        .collect())
}

fn parse_bound(raw: &str) -> Result<String, ApiError> {
    normalize_timestamp(raw)
        .ok_or_else(|| ApiError::InvalidRange(format!("unparseable timestamp: {}", raw)))
}

/// Merge N devices' filtered series onto one shared axis for `metric_id`.
/// The axis is the deduplicated union of all timestamps, ascending
/// (canonical timestamps sort chronologically as strings). Every device
/// contributes a value vector of exactly axis length, None where it has no
/// sample at that instant - a device with zero overlap still yields a
/// fully-None vector so chart legends stay consistent across filter
/// changes. Caller-supplied device order is preserved.
pub fn align(devices: &[(String, Vec<Sample>)], metric_id: &str) -> AlignedSeries {
    let mut axis: BTreeSet<&str> = BTreeSet::new();
    for (_, samples) in devices {
        for sample in samples {
            axis.insert(sample.timestamp.as_str());
        }
    }
    let labels: Vec<String> = axis.iter().map(|t| t.to_string()).collect();

    let mut series = Vec::with_capacity(devices.len());
    for (position, (folder_name, samples)) in devices.iter().enumerate() {
        // lookup built once per device; the merge pass is then O(axis)
        let by_timestamp: HashMap<&str, f64> = samples
            .iter()
            .filter_map(|s| s.value(metric_id).map(|v| (s.timestamp.as_str(), v)))
            .collect();
        let values: Vec<Option<f64>> = axis.iter().map(|t| by_timestamp.get(t).copied()).collect();
        series.push(DeviceSeries {
            folder_name: folder_name.clone(),
            color: palette_color(position),
            values,
        });
    }

    AlignedSeries { labels, series }
}

/// Mean/max/min over the samples where `metric_id` is present. Missing
/// values are excluded entirely, never coerced to zero. EmptySeries when no
/// sample carries the metric; callers surface that as "no data".
pub fn summarize(samples: &[Sample], metric_id: &str) -> Result<MetricSummary, ApiError> {
    let values: Vec<f64> = samples.iter().filter_map(|s| s.value(metric_id)).collect();
    if values.is_empty() {
        return Err(ApiError::EmptySeries);
    }
    let mean = values.iter().sum::<f64>() / (values.len() as f64);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    Ok(MetricSummary { mean, max, min })
}
