//! Fixed-window request admission control.
//!
//! One window per client key: the first request opens the window, each
//! request within it consumes budget, and the first request after the
//! window elapses resets both the start and the count. Over-limit requests
//! are rejected with 429 and a client-safe message.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;
use serde_json::json;

use crate::state::AppState;

struct Window {
    started_at: Instant,
    count: u32,
}

/// Per-client fixed-window request counter.
pub struct FixedWindowLimiter {
    window: Duration,
    max_requests: u32,
    buckets: DashMap<String, Window>,
}

impl FixedWindowLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            buckets: DashMap::new(),
        }
    }

    /// Consume one unit of budget for `key`. Returns `false` when the
    /// client has exhausted the current window.
    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entry = self.buckets.entry(key.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if now.duration_since(entry.started_at) >= self.window {
            entry.started_at = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }

    pub fn retry_after_secs(&self) -> u64 {
        self.window.as_secs().max(1)
    }

    /// Remove every bucket whose window has elapsed, returning how many
    /// were reclaimed.
    ///
    /// `allow` only resets a bucket when its client returns; the key is
    /// client-controlled (`x-forwarded-for`), so idle buckets must be
    /// swept out or the map grows with every distinct key ever seen.
    pub fn purge_stale(&self) -> usize {
        let before = self.buckets.len();
        self.buckets
            .retain(|_, bucket| bucket.started_at.elapsed() < self.window);
        before.saturating_sub(self.buckets.len())
    }

    /// Number of tracked client buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Middleware applied to the whole `/api` tree.
pub async fn rate_limit_layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);

    if !state.rate_limiter.allow(&key) {
        tracing::warn!(client = %key, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            [(
                axum::http::header::RETRY_AFTER,
                state.rate_limiter.retry_after_secs().to_string(),
            )],
            axum::Json(json!({
                "error": "Too many requests, please try again later."
            })),
        )
            .into_response();
    }

    next.run(request).await
}

/// Client identity for rate limiting: first `x-forwarded-for` hop when
/// behind a proxy, else the peer address, else a shared fallback bucket.
fn client_key(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
