use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::pipeline::PipelineError;

/// Unified API error type for all route handlers.
///
/// Detail strings are logged, never returned; the body only names which
/// dependency failed.
#[derive(Debug)]
pub enum ApiError {
    /// The completion service failed.
    ServiceUnavailable(String),
    /// The entity tagger failed.
    ScannerUnavailable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ServiceUnavailable(detail) => {
                tracing::error!(%detail, "completion service unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "completion service unavailable",
                )
            }
            ApiError::ScannerUnavailable(detail) => {
                tracing::error!(%detail, "entity scanner unavailable");
                (StatusCode::BAD_GATEWAY, "entity scanner unavailable")
            }
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::ServiceUnavailable(inner) => ApiError::ServiceUnavailable(inner.to_string()),
            PipelineError::ScannerUnavailable(inner) => ApiError::ScannerUnavailable(inner.to_string()),
        }
    }
}
