// Static metric catalog. Pure configuration: the ids match the performance
// CSV columns written by the collector. Misconfiguration (duplicate id) is
// a startup-time fatal error, never a per-request one.

use std::collections::HashSet;

use crate::models::{MetricDef, MetricGroup};

pub struct MetricCatalog {
    metrics: Vec<MetricDef>,
}

impl MetricCatalog {
    /// The collector's metric set: memory, CPU, frame smoothness, battery.
    pub fn builtin() -> anyhow::Result<Self> {
        let metrics = vec![
            MetricDef { id: "memory_total", name: "Total Memory (KB)", category: "Memory" },
            MetricDef { id: "memory_java_heap", name: "Java Heap (KB)", category: "Memory" },
            MetricDef { id: "memory_native_heap", name: "Native Heap (KB)", category: "Memory" },
            MetricDef { id: "memory_pss_total", name: "PSS Total (KB)", category: "Memory" },
            MetricDef { id: "cpu_percentage", name: "CPU Usage (%)", category: "CPU" },
            MetricDef { id: "total_frames", name: "Total Frames", category: "Smoothness" },
            MetricDef { id: "janky_frames", name: "Janky Frames", category: "Smoothness" },
            MetricDef { id: "janky_percent", name: "Janky Frame Ratio (%)", category: "Smoothness" },
            MetricDef { id: "battery_level", name: "Battery Level (%)", category: "Battery" },
            MetricDef { id: "battery_temperature", name: "Battery Temperature (°C)", category: "Battery" },
        ];
        let catalog = Self { metrics };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for m in &self.metrics {
            anyhow::ensure!(seen.insert(m.id), "duplicate metric id: {}", m.id);
            anyhow::ensure!(!m.name.is_empty(), "metric {} has empty name", m.id);
            anyhow::ensure!(!m.category.is_empty(), "metric {} has empty category", m.id);
        }
        Ok(())
    }

    pub fn metrics(&self) -> &[MetricDef] {
        &self.metrics
    }

    pub fn contains(&self, metric_id: &str) -> bool {
        self.metrics.iter().any(|m| m.id == metric_id)
    }

    /// Metrics grouped by category: category order is first-appearance
    /// order, metric order within a category is insertion order.
    pub fn grouped(&self) -> Vec<MetricGroup> {
        let mut groups: Vec<MetricGroup> = Vec::new();
        for m in &self.metrics {
            match groups.iter_mut().find(|g| g.category == m.category) {
                Some(g) => g.metrics.push(m.clone()),
                None => groups.push(MetricGroup {
                    category: m.category,
                    metrics: vec![m.clone()],
                }),
            }
        }
        groups
    }
}
