//! Periodic reclamation of expired entries in the in-process stores.
//!
//! The response cache drops expired entries lazily on lookup and the rate
//! limiter only resets a bucket when its client returns, so keys that
//! never recur (one-off cursors, spoofed forwarded addresses) would
//! otherwise accumulate without bound. This job walks both maps on a
//! fixed interval and removes everything past its window.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::cache::ResponseCache;
use crate::middleware::rate_limit::FixedWindowLimiter;

/// Run the store sweep loop until `cancel` is triggered.
pub async fn run(
    cache: Arc<ResponseCache>,
    limiter: Arc<FixedWindowLimiter>,
    interval: Duration,
    cancel: CancellationToken,
) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Store sweep job started"
    );

    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately; nothing can be stale yet.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Store sweep job stopping");
                break;
            }
            _ = ticker.tick() => {
                let cache_reclaimed = cache.purge_expired();
                let buckets_reclaimed = limiter.purge_stale();
                tracing::debug!(cache_reclaimed, buckets_reclaimed, "Store sweep completed");
            }
        }
    }
}
