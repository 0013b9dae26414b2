// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::artifact_repo::ArtifactRepo;
use crate::catalog::MetricCatalog;
use crate::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) repo: Arc<ArtifactRepo>,
    pub(crate) catalog: Arc<MetricCatalog>,
    pub(crate) config: AppConfig,
}

pub fn app(repo: Arc<ArtifactRepo>, catalog: Arc<MetricCatalog>, config: AppConfig) -> Router {
    let state = AppState {
        repo,
        catalog,
        config,
    };
    Router::new()
        .route("/", get(|| async { "perfboard: mobile performance dashboard API" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/devices", get(http::list_devices)) // GET /api/devices
        .route("/api/metrics", get(http::list_metrics)) // GET /api/metrics
        .route("/api/device/{folder_name}/info", get(http::device_info))
        .route(
            "/api/device/{folder_name}/performance",
            get(http::device_performance),
        )
        .route("/api/device/{folder_name}/summary", get(http::device_summary))
        .route("/api/compare", get(http::compare)) // GET /api/compare
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
