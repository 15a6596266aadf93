// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::DatabaseError;
use crate::models::ModelError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    ValidationError {
        message: String,
        missing_fields: Vec<String>,
    },
    InvalidJson(String),

    // 404 Not Found
    NotFound(String),

    // 413 Payload Too Large
    PayloadTooLarge(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::ValidationError { message, .. } => message,
            ApiError::InvalidJson(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::PayloadTooLarge(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::InvalidJson(_) => "INVALID_JSON",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Convert to JSON response body.
    ///
    /// The message goes out under both `error` (college routes) and
    /// `message` (admission form clients).
    pub fn to_json(&self) -> Value {
        let mut response = json!({
            "error": self.message(),
            "message": self.message(),
            "code": self.error_code()
        });

        if let ApiError::ValidationError { missing_fields, .. } = self {
            response["missing_fields"] = json!(missing_fields);
        }

        response
    }
}

impl ApiError {
    pub fn validation_error(message: impl Into<String>, missing_fields: Vec<String>) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            missing_fields,
        }
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        ApiError::PayloadTooLarge(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::MissingFields { message, fields } => ApiError::validation_error(message, fields),
            ModelError::InvalidDocument(msg) => ApiError::invalid_json(msg),
        }
    }
}

/// Maps store failures onto the API taxonomy with a route-specific message.
///
/// `NotFound` keeps `not_found_message`; every other store error is logged
/// with its detail and replaced by `failure_message` for the client.
pub trait StoreResultExt<T> {
    fn or_api_error(self, not_found_message: &str, failure_message: &str) -> Result<T, ApiError>;

    fn or_server_error(self, failure_message: &str) -> Result<T, ApiError>;
}

impl<T> StoreResultExt<T> for Result<T, DatabaseError> {
    fn or_api_error(self, not_found_message: &str, failure_message: &str) -> Result<T, ApiError> {
        self.map_err(|err| match err {
            DatabaseError::NotFound(detail) => {
                tracing::debug!("{}", detail);
                ApiError::not_found(not_found_message)
            }
            other => {
                tracing::error!(error = ?other, "{}", failure_message);
                ApiError::internal_server_error(failure_message)
            }
        })
    }

    fn or_server_error(self, failure_message: &str) -> Result<T, ApiError> {
        self.or_api_error("Not found", failure_message)
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_missing_fields() {
        let err = ApiError::validation_error(
            "College name and location are required",
            vec!["location".to_string()],
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = err.to_json();
        assert_eq!(body["error"], "College name and location are required");
        assert_eq!(body["message"], body["error"]);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["missing_fields"], json!(["location"]));
    }

    #[test]
    fn store_failure_hides_detail() {
        let result: Result<(), DatabaseError> = Err(DatabaseError::Backend("socket closed".into()));
        let err = result.or_server_error("Failed to fetch colleges").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Failed to fetch colleges");
        assert!(!err.to_json().to_string().contains("socket"));
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let result: Result<(), DatabaseError> = Err(DatabaseError::NotFound("colleges x not found".into()));
        let err = result
            .or_api_error("College not found", "Failed to fetch college")
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "College not found");
    }
}
