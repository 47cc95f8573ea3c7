//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /healthz`     - Liveness probe
//! - `/api/links*`       - Link management API
//! - `GET  /{code}`      - Short link redirect
//!
//! Static segments take precedence over the `/{code}` capture, so `/healthz`
//! and `/api` can never be resolved as short codes. The redirect service
//! additionally refuses those segments before querying the store.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .nest("/api", api::routes::link_routes())
        .route("/{code}", get(redirect_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/links/` reaches the
/// same handler as `/api/links`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
