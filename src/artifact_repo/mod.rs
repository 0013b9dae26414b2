// Read-only artifact store: one folder per device run under the configured
// root, written by the collection tooling. Every query re-reads from disk;
// nothing here mutates the tree, so concurrent requests need no locking.

mod csv;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{instrument, warn};

use crate::error::ApiError;
use crate::models::{DeviceDetail, DeviceRecord, Sample};

pub struct ArtifactRepo {
    root: PathBuf,
}

impl ArtifactRepo {
    pub fn new(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        anyhow::ensure!(
            root.is_dir(),
            "artifacts.root {} is not a directory",
            root.display()
        );
        Ok(Self { root })
    }

    /// All run folders under the root, sorted by folder name. A folder
    /// whose metadata cannot be read is skipped with a warning; one bad
    /// device must not prevent listing the others.
    #[instrument(skip(self), fields(repo = "artifact", operation = "list_devices"))]
    pub fn list_devices(&self) -> Result<Vec<DeviceRecord>, ApiError> {
        let entries = std::fs::read_dir(&self.root)
            .map_err(|_| ApiError::NotFound(self.root.display().to_string()))?;

        let mut folder_names: Vec<String> = entries
            .flatten()
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| is_run_folder(name))
            .collect();
        folder_names.sort();

        let mut out = Vec::with_capacity(folder_names.len());
        for folder_name in folder_names {
            match self.device_detail(&folder_name) {
                Ok(detail) => out.push(DeviceRecord {
                    folder_name,
                    display_name: detail.model.full_name,
                    android_version: detail.android.version,
                }),
                Err(e) => {
                    warn!(folder = %folder_name, error = %e, "skipping device folder");
                }
            }
        }
        Ok(out)
    }

    /// Static metadata from the folder's device_info_*.json.
    pub fn device_detail(&self, folder_name: &str) -> Result<DeviceDetail, ApiError> {
        let folder = self.folder_path(folder_name)?;
        let info_path = find_artifact(&folder, "device_info_", ".json")
            .ok_or_else(|| ApiError::NotFound(format!("{}/device_info_*.json", folder_name)))?;

        let raw = std::fs::read_to_string(&info_path).map_err(|e| ApiError::MalformedData {
            file: info_path.display().to_string(),
            detail: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ApiError::MalformedData {
            file: info_path.display().to_string(),
            detail: e.to_string(),
        })
    }

    /// Full sample sequence from the folder's *_performance.csv, sorted
    /// ascending by canonical timestamp. Malformed rows are dropped and
    /// counted, not fatal; duplicate timestamps resolve last-write-wins.
    #[instrument(skip(self), fields(repo = "artifact", operation = "load_samples"))]
    pub fn load_samples(&self, folder_name: &str) -> Result<Vec<Sample>, ApiError> {
        let folder = self.folder_path(folder_name)?;
        let csv_path = find_artifact(&folder, "", "_performance.csv")
            .ok_or_else(|| ApiError::NotFound(format!("{}/*_performance.csv", folder_name)))?;

        let raw = std::fs::read_to_string(&csv_path).map_err(|e| ApiError::MalformedData {
            file: csv_path.display().to_string(),
            detail: e.to_string(),
        })?;

        let mut lines = raw.lines().filter(|l| !l.trim().is_empty());
        let header = lines
            .next()
            .and_then(csv::parse_header)
            .ok_or_else(|| ApiError::MalformedData {
                file: csv_path.display().to_string(),
                detail: "missing or invalid header row".into(),
            })?;

        let mut by_timestamp: BTreeMap<String, Sample> = BTreeMap::new();
        let mut skipped = 0usize;
        for line in lines {
            match csv::parse_row(&header, line) {
                Some(sample) => {
                    by_timestamp.insert(sample.timestamp.clone(), sample);
                }
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!(
                file = %csv_path.display(),
                skipped,
                "dropped malformed performance rows"
            );
        }
        Ok(by_timestamp.into_values().collect())
    }

    fn folder_path(&self, folder_name: &str) -> Result<PathBuf, ApiError> {
        // folder_name is an opaque handle from list_devices; anything that
        // escapes the root is treated as unknown.
        if folder_name.is_empty()
            || folder_name.contains(['/', '\\'])
            || folder_name.contains("..")
        {
            return Err(ApiError::NotFound(folder_name.to_string()));
        }
        let path = self.root.join(folder_name);
        if path.is_dir() {
            Ok(path)
        } else {
            Err(ApiError::NotFound(folder_name.to_string()))
        }
    }
}

/// First file in `dir` whose name has the given prefix and suffix, by
/// sorted name so repeated reads are deterministic.
fn find_artifact(dir: &Path, prefix: &str, suffix: &str) -> Option<PathBuf> {
    let mut matches: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .flatten()
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|n| n.starts_with(prefix) && n.ends_with(suffix))
        })
        .map(|e| e.path())
        .collect();
    matches.sort();
    matches.into_iter().next()
}

/// Run folders follow the collector's `<device>_<YYYYMMDD>_<HHMMSS>` naming.
fn is_run_folder(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < 17 {
        return false;
    }
    let tail = &bytes[bytes.len() - 16..];
    tail[0] == b'_'
        && tail[1..9].iter().all(|c| c.is_ascii_digit())
        && tail[9] == b'_'
        && tail[10..].iter().all(|c| c.is_ascii_digit())
}
