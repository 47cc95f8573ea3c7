//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports that the process is alive.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// Does not touch the database, so it stays green while the store is down.
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "version": "0.1.0",
///   "uptime": 42.17,
///   "timestamp": "2025-01-02T03:04:05.678Z"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime_seconds(),
        timestamp: Utc::now(),
    })
}
