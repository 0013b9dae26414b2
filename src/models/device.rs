// Device identity models. DeviceRecord is the listing row; DeviceDetail
// mirrors the collector's device_info_*.json. Absent fields stay at their
// defaults (empty / zero), never invented.

use serde::{Deserialize, Serialize};

/// One discovered run folder. `folder_name` is the opaque handle used by
/// every subsequent query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub folder_name: String,
    pub display_name: String,
    pub android_version: String,
}

/// Expanded static metadata for one device, loaded on demand. Keys stay
/// snake_case because they round-trip the collector's JSON unmodified.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceDetail {
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub model: DeviceModelInfo,
    #[serde(default)]
    pub android: AndroidInfo,
    #[serde(default)]
    pub memory: DeviceMemoryInfo,
    #[serde(default)]
    pub screen: ScreenInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceModelInfo {
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AndroidInfo {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub sdk_level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceMemoryInfo {
    #[serde(default)]
    pub total_memory_gb: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenInfo {
    #[serde(default)]
    pub resolution: String,
}
