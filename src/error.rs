//! Error handling module
//!
//! Centralized error types and HTTP response conversion. Handlers return
//! `AppResult` and never build failure responses themselves.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;
use crate::store::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Server errors (5xx)
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::validation(message))
    }

    pub fn user_not_found(id: impl ToString) -> Self {
        AppError::Domain(DomainError::user_not_found(id))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => {
                AppError::validation("User with this username or email already exists")
            }
            StoreError::NotFound(id) => AppError::user_not_found(id),
            other => AppError::Store(other),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Status code and machine-readable code for this error.
    ///
    /// Not-found is reported as 400, matching the validation status.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Domain(DomainError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            AppError::Domain(DomainError::UserNotFound(_)) => {
                (StatusCode::BAD_REQUEST, "user_not_found")
            }
            AppError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        let (error, details) = match &self {
            AppError::Domain(DomainError::UserNotFound(id)) => {
                (self.to_string(), Some(id.clone()))
            }
            AppError::Domain(domain_err) => (domain_err.to_string(), None),
            AppError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                ("Internal server error".to_string(), None)
            }
        };

        let body = ErrorResponse {
            error,
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_domain_errors_are_bad_request() {
        let validation = AppError::validation("Passwords do not match");
        assert_eq!(
            validation.status_and_code(),
            (StatusCode::BAD_REQUEST, "validation_error")
        );

        let not_found = AppError::user_not_found(Uuid::new_v4());
        assert_eq!(
            not_found.status_and_code(),
            (StatusCode::BAD_REQUEST, "user_not_found")
        );
    }

    #[test]
    fn test_store_conflict_becomes_validation() {
        let err: AppError = StoreError::Conflict("users_email_key".to_string()).into();
        assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
    }

    #[test]
    fn test_store_not_found_becomes_not_found() {
        let err: AppError = StoreError::NotFound(Uuid::new_v4()).into();
        assert!(matches!(err, AppError::Domain(DomainError::UserNotFound(_))));
    }

    #[test]
    fn test_database_error_is_internal() {
        let err: AppError = StoreError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
