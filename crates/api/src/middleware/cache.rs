//! Read-through response cache middleware.
//!
//! On a hit the stored body is returned immediately and the downstream
//! handler never runs; on a miss the handler runs once, its body is
//! captured and stored under the request key, and the response is rebuilt
//! from the captured bytes. Concurrent misses on the same key may each
//! invoke the handler (no coalescing).

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest response body the cache will store. Larger bodies are still
/// served, they just pass through uncached.
const MAX_CACHED_BODY_BYTES: usize = 1024 * 1024;

/// Middleware for the cacheable catalog routes.
///
/// The cache key is the canonical request path plus query string,
/// independent of method or headers. Only `200 OK` responses are stored;
/// error responses always pass through uncached.
pub async fn response_cache_layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let key = cache_key(&request);

    if let Some(body) = state.response_cache.get(&key) {
        tracing::debug!(key = %key, outcome = "hit", "response cache");
        return cached_json(body);
    }
    tracing::debug!(key = %key, outcome = "miss", "response cache");

    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    // The handlers build their JSON bodies in memory, so buffering here
    // costs nothing extra.
    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, key = %key, "Failed to buffer response body for caching");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if bytes.len() <= MAX_CACHED_BODY_BYTES {
        state.response_cache.put(key, bytes.clone());
    } else {
        tracing::debug!(key = %key, size = bytes.len(), "Response body exceeds cache limit, passing through uncached");
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Canonical cache key: request path plus raw query string.
fn cache_key(request: &Request) -> String {
    match request.uri().query() {
        Some(query) => format!("{}?{query}", request.uri().path()),
        None => request.uri().path().to_string(),
    }
}

/// Rebuild a cached JSON response. All cacheable routes emit JSON, so the
/// stored body carries no per-entry content type.
fn cached_json(body: Bytes) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
