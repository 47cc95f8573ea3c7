//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. Client errors carry a
//! descriptive message; server errors are logged here and answered with a
//! generic message so store details never leak to callers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::repositories::RepositoryError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error code plus a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid code format: {0}")]
    InvalidCodeFormat(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Code already exists: {0}")]
    CodeConflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_)
            | AppError::InvalidCodeFormat(_)
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::CodeConflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the public payload.
    ///
    /// Server-side errors are reduced to a generic message.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::InvalidUrl(_) => ErrorInfo {
                code: "invalid_url",
                message: "target_url must be an absolute URL with a scheme and host".to_string(),
            },
            AppError::InvalidCodeFormat(_) => ErrorInfo {
                code: "invalid_code_format",
                message: "custom_code must be 6-8 alphanumeric characters".to_string(),
            },
            AppError::InvalidRequest(reason) => ErrorInfo {
                code: "invalid_request",
                message: reason.clone(),
            },
            AppError::CodeConflict(code) => ErrorInfo {
                code: "code_conflict",
                message: format!("Code '{code}' is already in use"),
            },
            AppError::NotFound(what) => ErrorInfo {
                code: "not_found",
                message: format!("'{what}' was not found"),
            },
            AppError::Unavailable(_) => ErrorInfo {
                code: "store_unavailable",
                message: "Service temporarily unavailable".to_string(),
            },
            AppError::Internal(_) => ErrorInfo {
                code: "internal_error",
                message: "Internal server error".to_string(),
            },
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::ConstraintViolation { constraint } => {
                AppError::Internal(format!("unexpected constraint violation: {constraint:?}"))
            }
            RepositoryError::Unavailable(reason) => AppError::Unavailable(reason),
            RepositoryError::Database(reason) => AppError::Internal(reason),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
