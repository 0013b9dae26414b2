// Aligned multi-series: several devices' samples merged onto one shared
// timestamp axis for comparison charts. None = no sample at that instant
// (serialized as null; zero is a valid reading and must stay distinct).

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignedSeries {
    /// Deduplicated union of all input timestamps, ascending.
    pub labels: Vec<String>,
    /// One entry per requested device, in the caller-supplied order.
    pub series: Vec<DeviceSeries>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSeries {
    pub folder_name: String,
    /// Chart color, a pure function of list position.
    pub color: &'static str,
    /// Exactly `labels.len()` entries, aligned positionally to the axis.
    pub values: Vec<Option<f64>>,
}

/// Summary statistics over one metric of a filtered series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}
