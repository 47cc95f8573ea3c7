//! HTTP request/response tracing middleware.

use axum::extract::MatchedPath;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Builds the per-request span.
///
/// The span carries the route template (`/{code}`, `/api/links/{code}`) next
/// to the concrete path, so log lines group by endpoint rather than by
/// individual short code. Requests answered by the fallback report
/// `route=unmatched`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteSpan;

impl<B> MakeSpan<B> for RouteSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str)
            .unwrap_or("unmatched");

        tracing::info_span!(
            "request",
            method = %request.method(),
            route,
            path = %request.uri().path(),
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// Responses are logged at `INFO` with status and latency in milliseconds:
///
/// ```text
/// INFO request{method=GET route=/{code} path=/promo24}: finished processing request latency=3 ms status=302
/// ```
///
/// Must be added with `Router::layer` so the matched route is known when the
/// span is created.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RouteSpan> {
    TraceLayer::new_for_http().make_span_with(RouteSpan).on_response(
        DefaultOnResponse::new()
            .level(Level::INFO)
            .latency_unit(LatencyUnit::Millis),
    )
}
