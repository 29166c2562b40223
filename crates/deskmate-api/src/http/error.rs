//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use deskmate_types::error::SupportError;

use super::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Support-desk errors from the session controller or registry.
    Support(SupportError),
    /// Validation error.
    Validation(String),
}

impl From<SupportError> for AppError {
    fn from(e: SupportError) -> Self {
        AppError::Support(e)
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Support(SupportError::ServiceUnavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            AppError::Support(SupportError::SessionNotFound(_)) => {
                (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND")
            }
            AppError::Support(SupportError::InvalidLanguage(_)) | AppError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            AppError::Support(e) => e.to_string(),
            AppError::Validation(msg) => msg.clone(),
        };

        if status.is_server_error() {
            tracing::warn!(code, %message, "request failed");
        }

        let body = ApiResponse::error(code, &message, Uuid::now_v7().to_string(), 0);
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskmate_types::llm::LlmError;

    #[test]
    fn test_status_mapping() {
        let unavailable = AppError::from(SupportError::ServiceUnavailable(LlmError::Timeout {
            after_ms: 30_000,
        }));
        assert_eq!(
            unavailable.status_and_code(),
            (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
        );

        let missing = AppError::from(SupportError::SessionNotFound(Uuid::nil()));
        assert_eq!(
            missing.status_and_code(),
            (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND")
        );

        let language = AppError::from(SupportError::InvalidLanguage("Klingon".into()));
        assert_eq!(
            language.status_and_code(),
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::Validation("query must not be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
