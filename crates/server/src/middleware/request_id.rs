//! Request ID middleware for request tracing and correlation.
//!
//! Runs outside the trace layer. An id taken from the client (or a fresh
//! UUID v4) is written back onto the request headers, so the `http_request`
//! span and the handlers all see the same value. The id is also tagged on
//! the Sentry scope and echoed on the response.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that ensures every request carries an `x-request-id` header.
///
/// A client-supplied id is kept when it is valid visible ASCII; otherwise a
/// new UUID v4 replaces it.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .filter(|value| value.to_str().is_ok())
        .cloned()
        .or_else(|| HeaderValue::from_str(&Uuid::new_v4().to_string()).ok());

    let Some(request_id) = request_id else {
        return next.run(request).await;
    };

    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    if let Ok(id) = request_id.to_str() {
        sentry::configure_scope(|scope| scope.set_tag("request_id", id));
    }

    let mut response = next.run(request).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    response
}

/// The request id previously assigned by [`request_id_middleware`], if any.
#[must_use]
pub fn request_id<B>(request: &axum::http::Request<B>) -> &str {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
