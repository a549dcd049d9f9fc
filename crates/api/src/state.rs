use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::config::ServerConfig;
use crate::counters::ViewCounter;
use crate::middleware::rate_limit::FixedWindowLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The cache, counter, and limiter stores are explicit handles injected
/// here rather than process-global statics, so tests can build isolated
/// instances and the backing store can be swapped without touching
/// handlers. Cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: galleria_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-through response cache for the cacheable GET routes.
    pub response_cache: Arc<ResponseCache>,
    /// Pending view-count buffer, flushed periodically by the background job.
    pub view_counter: Arc<ViewCounter>,
    /// Fixed-window request admission control.
    pub rate_limiter: Arc<FixedWindowLimiter>,
}
