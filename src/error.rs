// Request-level error taxonomy. Startup failures stay anyhow; everything a
// handler can return goes through ApiError so the wire shape is uniform.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown device folder or missing expected artifact file.
    #[error("not found: {0}")]
    NotFound(String),

    /// Whole file could not be read or parsed. Row-level problems are
    /// recovered by skipping the row and never surface as this.
    #[error("malformed data in {file}: {detail}")]
    MalformedData { file: String, detail: String },

    /// start after end, or a bound that does not parse as a timestamp.
    #[error("invalid time range: {0}")]
    InvalidRange(String),

    /// Statistics requested over zero eligible samples. Handlers map this
    /// to a "no data" body, not an error status.
    #[error("no data")]
    EmptySeries,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedData { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            // handlers intercept this before it becomes a response
            ApiError::EmptySeries => StatusCode::OK,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = axum::Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
