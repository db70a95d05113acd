use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use precon_finder::FinderError;
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<FinderError> for AppError {
    fn from(e: FinderError) -> Self {
        let message = e.to_string();
        match e {
            FinderError::NotFound(msg) => AppError::not_found(msg),
            FinderError::InvalidArgument(msg) => AppError::bad_request(msg),
            FinderError::RateLimited => Self {
                status: StatusCode::TOO_MANY_REQUESTS,
                message,
            },
            FinderError::PaymentRequired => Self {
                status: StatusCode::PAYMENT_REQUIRED,
                message,
            },
            FinderError::Upstream { .. } | FinderError::Http(_) => AppError::bad_gateway(message),
            _ => AppError::internal(message),
        }
    }
}
