// GET handlers. Stateless: every response is derived fresh from the on-disk
// artifacts plus the request parameters.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;
use crate::series;
use crate::version::{NAME, VERSION};

/// GET /version - service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/devices - every discovered run folder as a device record.
pub(super) async fn list_devices(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let devices = state.repo.list_devices()?;
    Ok(axum::Json(devices))
}

/// GET /api/metrics - the metric catalog grouped by category.
pub(super) async fn list_metrics(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.catalog.grouped())
}

/// GET /api/device/{folder_name}/info - static device metadata.
pub(super) async fn device_info(
    State(state): State<AppState>,
    Path(folder_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state.repo.device_detail(&folder_name)?;
    Ok(axum::Json(detail))
}

#[derive(Debug, Deserialize)]
pub(super) struct RangeQuery {
    start_time: Option<String>,
    end_time: Option<String>,
}

/// GET /api/device/{folder_name}/performance?start_time=&end_time= -
/// the device's samples restricted to the window. An empty window is an
/// empty list, not an error.
pub(super) async fn device_performance(
    State(state): State<AppState>,
    Path(folder_name): Path<String>,
    Query(range): Query<RangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let samples = state.repo.load_samples(&folder_name)?;
    let filtered = series::filter_by_time(
        &samples,
        range.start_time.as_deref(),
        range.end_time.as_deref(),
    )?;
    Ok(axum::Json(filtered))
}

#[derive(Debug, Deserialize)]
pub(super) struct SummaryQuery {
    metric: String,
    start_time: Option<String>,
    end_time: Option<String>,
}

/// GET /api/device/{folder_name}/summary?metric=&start_time=&end_time= -
/// mean/max/min for one metric. Zero eligible samples is a noData body,
/// distinct from a transport error.
pub(super) async fn device_summary(
    State(state): State<AppState>,
    Path(folder_name): Path<String>,
    Query(query): Query<SummaryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.catalog.contains(&query.metric) {
        return Err(ApiError::NotFound(format!("metric {}", query.metric)));
    }
    let samples = state.repo.load_samples(&folder_name)?;
    let filtered = series::filter_by_time(
        &samples,
        query.start_time.as_deref(),
        query.end_time.as_deref(),
    )?;
    match series::summarize(&filtered, &query.metric) {
        Ok(summary) => Ok(axum::Json(serde_json::json!({
            "metric": query.metric,
            "summary": summary,
        }))),
        Err(ApiError::EmptySeries) => Ok(axum::Json(serde_json::json!({
            "metric": query.metric,
            "noData": true,
        }))),
        Err(e) => Err(e),
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CompareQuery {
    /// Comma-separated folder names, in the order the chart should show them.
    devices: String,
    metric: String,
    start_time: Option<String>,
    end_time: Option<String>,
}

/// GET /api/compare?devices=a,b&metric=&start_time=&end_time= - several
/// devices' filtered series merged onto one shared timestamp axis.
pub(super) async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.catalog.contains(&query.metric) {
        return Err(ApiError::NotFound(format!("metric {}", query.metric)));
    }
    let folder_names: Vec<&str> = query
        .devices
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let cap = state.config.limits.max_compare_devices;
    if folder_names.len() > cap {
        return Err(ApiError::InvalidRange(format!(
            "at most {} devices per comparison, got {}",
            cap,
            folder_names.len()
        )));
    }

    let mut inputs = Vec::with_capacity(folder_names.len());
    for folder_name in folder_names {
        let samples = state.repo.load_samples(folder_name)?;
        let filtered = series::filter_by_time(
            &samples,
            query.start_time.as_deref(),
            query.end_time.as_deref(),
        )?;
        inputs.push((folder_name.to_string(), filtered));
    }

    Ok(axum::Json(series::align(&inputs, &query.metric)))
}
