//! In-process TTL store backing the read-through response cache.
//!
//! Expiration is time-based only; there is no invalidation on writes since
//! catalog writes happen out-of-band of this API. Stale cached view counts
//! for up to one TTL are accepted. Expired entries are dropped lazily on
//! lookup, and a periodic sweep (`background::sweep`) reclaims the ones
//! whose keys never recur, so the map stays bounded by the working set of
//! one TTL window.

use std::time::{Duration, Instant};

use axum::body::Bytes;
use dashmap::DashMap;

struct CachedEntry {
    body: Bytes,
    stored_at: Instant,
}

/// Keyed response-body store with a fixed TTL.
///
/// Keys are canonical request path + query string; values are the captured
/// JSON bodies. Concurrent misses on the same key are not coalesced: both
/// callers run the downstream handler and the later store wins.
pub struct ResponseCache {
    ttl: Duration,
    entries: DashMap<String, CachedEntry>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
        }
    }

    /// Fetch an unexpired body for `key`, removing the entry if it has
    /// expired.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let entry = self.entries.get(key)?;
        if entry.stored_at.elapsed() >= self.ttl {
            // Drop the read guard before removing to avoid self-deadlock.
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.body.clone())
    }

    /// Store a response body under `key`, restarting its TTL.
    pub fn put(&self, key: String, body: Bytes) {
        self.entries.insert(
            key,
            CachedEntry {
                body,
                stored_at: Instant::now(),
            },
        );
    }

    /// Remove every expired entry, returning how many were reclaimed.
    ///
    /// Lazy expiry on `get` only covers keys that are looked up again;
    /// the background sweep calls this to reclaim the rest.
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        before.saturating_sub(self.entries.len())
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
