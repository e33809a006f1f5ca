use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidPayload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self, "failed to qualify lead");

        // The caller gets one generic failure signal; details stay in the logs.
        let body = serde_json::json!({ "error": "Failed to qualify lead" });
        (status, axum::Json(body)).into_response()
    }
}
