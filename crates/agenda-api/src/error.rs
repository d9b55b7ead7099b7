// Error -> HTTP response mapping
//
// The boundary inspects only the error kind: Validation -> 400,
// Business -> 503, Internal -> 500. The message is passed through verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use agenda_contracts::EventError;

/// Standard error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error kind: "validation", "business", or "internal"
    pub error: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Newtype so service errors convert into HTTP responses via `?`
#[derive(Debug)]
pub struct ApiError(pub EventError);

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            EventError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation"),
            EventError::Business { .. } => (StatusCode::SERVICE_UNAVAILABLE, "business"),
            EventError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self.0);
        }

        let body = Json(ErrorResponse {
            error: kind,
            message: self.0.to_string(),
        });

        (status, body).into_response()
    }
}
