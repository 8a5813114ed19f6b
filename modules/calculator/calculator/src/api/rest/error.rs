use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use calculator_sdk::CalculatorError;

use super::dto::ErrorResponse;

/// Prefix for messages of unexpected (5xx) failures.
const UNEXPECTED_PREFIX: &str = "Calculation error";

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by REST handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unexpected(detail: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("{UNEXPECTED_PREFIX}: {detail}"),
        }
    }
}

/// Map calculator error to an HTTP error: domain errors are the caller's
/// fault (400), everything else is unexpected (500).
impl From<CalculatorError> for ApiError {
    fn from(e: CalculatorError) -> Self {
        if e.is_domain() {
            Self::bad_request(e.to_string())
        } else {
            Self::unexpected(e)
        }
    }
}

/// Undecodable bodies are reported in the same shape as every other failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unexpected(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), error = %self.message, "request failed");
        } else {
            tracing::debug!(status = self.status.as_u16(), error = %self.message, "request rejected");
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use calculator_sdk::Operation;

    #[test]
    fn domain_errors_map_to_bad_request() {
        let err = ApiError::from(CalculatorError::DivisionByZero);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Cannot divide by zero!");

        let err = ApiError::from(CalculatorError::unknown_operation("modulo"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid operation");
    }

    #[test]
    fn unexpected_errors_map_to_internal_error() {
        let err = ApiError::from(CalculatorError::non_finite(Operation::Power));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.message,
            "Calculation error: result of 'power' is not a finite number"
        );
    }

    #[test]
    fn into_response_keeps_status() {
        let resp = ApiError::bad_request("nope").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let ct = resp
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, "application/json");
    }
}
