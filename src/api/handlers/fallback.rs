//! Handler for unmatched routes.

use axum::http::Uri;

use crate::error::AppError;

/// Answers any unmatched path with the JSON 404 body.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
