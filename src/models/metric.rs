// Metric catalog models

use serde::Serialize;

/// One measurable quantity. `id` matches a performance CSV column.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDef {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
}

/// Metrics of one category, in catalog insertion order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricGroup {
    pub category: &'static str,
    pub metrics: Vec<MetricDef>,
}
