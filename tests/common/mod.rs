// Shared test helpers: throwaway artifact trees and sample builders

use std::collections::BTreeMap;
use std::path::Path;

use perfboard::models::Sample;

pub const PIXEL_INFO_JSON: &str = r#"{
    "device_id": "8A2X0V1QZ",
    "model": { "full_name": "Google Pixel 7" },
    "android": { "version": "14", "sdk_level": "34" },
    "memory": { "total_memory_gb": 7.8 },
    "screen": { "resolution": "1080x2400" }
}"#;

pub const XIAOMI_INFO_JSON: &str = r#"{
    "device_id": "c9d41f2e",
    "model": { "full_name": "Xiaomi 13" },
    "android": { "version": "13", "sdk_level": "33" },
    "memory": { "total_memory_gb": 11.6 },
    "screen": { "resolution": "1440x3200" }
}"#;

/// Creates `<root>/<folder_name>` with a device_info json and, when given,
/// a performance CSV, mirroring the collector's output layout.
#[allow(dead_code)]
pub fn write_device_folder(root: &Path, folder_name: &str, info_json: &str, csv: Option<&str>) {
    let folder = root.join(folder_name);
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(folder.join("device_info_test.json"), info_json).unwrap();
    if let Some(rows) = csv {
        std::fs::write(folder.join("run_performance.csv"), rows).unwrap();
    }
}

#[allow(dead_code)]
pub fn sample(timestamp: &str, pairs: &[(&str, f64)]) -> Sample {
    let metrics: BTreeMap<String, f64> =
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    Sample {
        timestamp: timestamp.to_string(),
        metrics,
    }
}
