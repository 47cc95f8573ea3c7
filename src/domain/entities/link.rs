//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its click counter.
///
/// `code` and `target_url` never change after creation. Only the redirect
/// path touches `total_clicks` and `last_clicked`.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        total_clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            total_clicks,
            last_clicked,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
