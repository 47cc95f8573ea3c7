//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::link::{CreateLinkRequest, DeleteLinkResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "target_url": "https://example.com/some/long/path",
///   "custom_code": "promo24"   // optional, 6-8 alphanumeric characters
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: invalid URL, invalid code or malformed body
/// - 409 Conflict: the code is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let link = state
        .link_service
        .create_link(payload.target_url, payload.custom_code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single link with its click counter.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    Ok(Json(link.into()))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Response
///
/// ```json
/// { "message": "Link deleted successfully", "code": "abc123" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    let code = state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteLinkResponse {
        message: "Link deleted successfully".to_string(),
        code,
    }))
}
