// Domain models for the dashboard API

mod alignment;
mod device;
mod metric;
mod sample;

pub use alignment::{AlignedSeries, DeviceSeries, MetricSummary};
pub use device::{
    AndroidInfo, DeviceDetail, DeviceMemoryInfo, DeviceModelInfo, DeviceRecord, ScreenInfo,
};
pub use metric::{MetricDef, MetricGroup};
pub use sample::{Sample, TIMESTAMP_FORMAT, normalize_timestamp};
