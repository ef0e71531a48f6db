//! General-purpose middleware for the API.
//!
//! Request tracing lives here; session handling is auth-specific and lives in
//! `auth::middleware`.

use axum::body::Body;
use axum::http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::Span;

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl MakeSpan<Body> for RequestSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        tracing::info_span!(
            "http.request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version()
        )
    }
}

pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan>;

pub fn trace_layer() -> HttpTraceLayer {
    TraceLayer::new_for_http().make_span_with(RequestSpan)
}
