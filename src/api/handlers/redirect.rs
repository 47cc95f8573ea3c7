//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject reserved segments (`api`, `healthz`)
/// 2. Increment the click counter and read the target in one statement
/// 3. Return 302 Found
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state.redirect_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]).into_response())
}
