//! Permissive CORS headers for the assistant platform
//!
//! Every response carries the same three headers. `OPTIONS` on any path is
//! answered here with an empty `204 No Content` and never reaches a handler.

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::Response,
};

/// Allowed origins
pub const ALLOW_ORIGIN: &str = "*";

/// Allowed methods
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";

/// Allowed request headers
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, OpenAI-Conversation-ID";

fn apply_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
}

/// CORS middleware
pub async fn cors_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        tracing::trace!(path = %req.uri().path(), "answering preflight");
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::NO_CONTENT;
        apply_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(req).await;
    apply_headers(response.headers_mut());
    response
}
