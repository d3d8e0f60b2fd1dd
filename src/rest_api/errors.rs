//! # REST API Errors
//!
//! Error taxonomy at the HTTP boundary and its status-code mapping. Domain
//! failures are recovered here: logged, converted to a status code, never
//! propagated further.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::service::ServiceError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Domain failure raised by the client service
    #[error("{0}")]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,

            ApiError::Service(err) => match err {
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::AlreadyExists(_) => StatusCode::CONFLICT,
                ServiceError::BadResource { .. } => StatusCode::BAD_REQUEST,
                // Infrastructure faults are not part of the recovered
                // taxonomy and fall through to the default error path
                ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// Error response body; carries the message and code, never a stack trace
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        Logger::error(
            "request_failed",
            &[("error", &message), ("status", status.as_str())],
        );
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidQueryParam("page".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ServiceError::NotFound("a".to_string())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ServiceError::AlreadyExists("a".to_string())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(ServiceError::BadResource {
                context: "Failed to save client".to_string(),
                messages: vec!["Client name is null or empty".to_string()],
            })
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_faults_map_to_internal_error() {
        let err = ApiError::from(ServiceError::Store(StoreError::Backend(
            "connection refused".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_body() {
        let err = ApiError::from(ServiceError::NotFound("ghost".to_string()));
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "Cannot find Client with id: ghost");
    }
}
