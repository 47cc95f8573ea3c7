//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    /// Process uptime in seconds.
    pub uptime: f64,
    pub timestamp: DateTime<Utc>,
}
