//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// A missing `target_url` deserializes to an empty string so it fails URL
/// validation with the same error as any other malformed URL.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub target_url: String,

    /// Optional custom short code (6-8 alphanumeric characters).
    pub custom_code: Option<String>,
}

/// JSON representation of a link.
///
/// Timestamps serialize as RFC 3339 / ISO-8601 strings; `last_clicked` is
/// `null` until the first redirect.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target_url: link.target_url,
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Confirmation returned after a delete.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub message: String,
    pub code: String,
}
