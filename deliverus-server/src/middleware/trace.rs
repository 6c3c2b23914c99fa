//! Request span for `TraceLayer`
//!
//! Each request runs inside a `request` span carrying the request id set by
//! `SetRequestIdLayer`, the method, the matched route and, for routes under
//! `/restaurants/{restaurant_id}`, the restaurant id. Handler logs inherit
//! these fields.

use axum::extract::MatchedPath;
use http::Request;
use tower_http::trace::MakeSpan;
use tracing::Span;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str)
            .unwrap_or_else(|| request.uri().path());

        tracing::info_span!(
            "request",
            request_id = %request_id,
            method = %request.method(),
            route = %route,
            restaurant_id = restaurant_id(request.uri().path()),
        )
    }
}

/// `Some(id)` for `/restaurants/{id}` and its sub-routes
fn restaurant_id(path: &str) -> Option<i64> {
    path.strip_prefix("/restaurants/")?
        .split('/')
        .next()?
        .parse()
        .ok()
}
