//! Fixed CORS header application.
//!
//! Every response of both surfaces carries the same header set, including
//! the 400/404/405/500 branches and extractor rejections, so the headers are
//! applied as response layers rather than per handler. Each surface
//! advertises its own method list.

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

/// Method list advertised by the auth surface.
pub const AUTH_METHODS: &str = "GET, POST, PUT";
/// Method list advertised by the student surface.
pub const STUDENT_METHODS: &str = "GET, POST, PUT, DELETE";

const ALLOW_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "Content-Type";

/// Attach the fixed header set to every response produced by `router`.
pub(crate) fn apply_fixed_headers<S>(router: Router<S>, methods: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(methods),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}

/// Attach the header set only where an inner surface has not already.
///
/// Covers the router-level fallback for paths matching neither surface; the
/// wider student method list is advertised there.
pub(crate) fn apply_default_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(STUDENT_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}
