//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use learnhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts the
/// domain error via `From`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match self.0.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %self.0, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.0.message,
        };

        (status, Json(body)).into_response()
    }
}

/// Flatten `validator` errors into a single validation [`ApiError`].
pub fn validation_error(errors: validator::ValidationErrors) -> ApiError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value"),
            })
        })
        .collect();
    parts.sort();
    ApiError(AppError::validation(parts.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 1, message = "title cannot be empty"))]
        title: String,
    }

    #[test]
    fn test_validation_error_mentions_field_and_message() {
        let form = Form {
            title: String::new(),
        };
        let err = validation_error(form.validate().unwrap_err());
        assert_eq!(err.0.kind, ErrorKind::Validation);
        assert!(err.0.message.contains("title: title cannot be empty"));
    }

    #[test]
    fn test_error_kind_to_status_mapping() {
        let cases = [
            (ErrorKind::Validation, StatusCode::BAD_REQUEST),
            (ErrorKind::NotFound, StatusCode::NOT_FOUND),
            (ErrorKind::Conflict, StatusCode::CONFLICT),
            (ErrorKind::Database, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorKind::Configuration, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorKind::Serialization, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorKind::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (kind, expected) in cases {
            let response = ApiError(AppError::new(kind, "boom")).into_response();
            assert_eq!(response.status(), expected, "kind {kind}");
        }
    }

    #[tokio::test]
    async fn test_error_body_carries_code_and_message() {
        let response = ApiError(AppError::not_found("Course 42 not found")).into_response();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).expect("parse body");
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.message, "Course 42 not found");

        let response = ApiError(AppError::conflict("slug already exists")).into_response();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).expect("parse body");
        assert_eq!(body.error, "CONFLICT");

        let response = ApiError(AppError::internal("pool exhausted")).into_response();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).expect("parse body");
        assert_eq!(body.error, "INTERNAL_ERROR");
    }
}
