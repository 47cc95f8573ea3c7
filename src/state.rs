//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;

use crate::application::services::{LinkService, RedirectService};
use crate::infrastructure::persistence::PgLinkRepository;

/// Services built around one explicitly constructed connection pool.
///
/// Cloning is cheap: every field is reference counted or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub redirect_service: Arc<RedirectService<PgLinkRepository>>,
    pub started_at: Instant,
}

impl AppState {
    /// Wires repositories and services on top of `pool`.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(link_repository)),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was built.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
