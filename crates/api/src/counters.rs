//! Pending view-count buffer.
//!
//! Views are counted per-request as a side effect of profile and detail
//! reads, buffered here, and periodically added to the durable `views`
//! columns by the background flush job. Clients always observe
//! `durable + pending`, so counts are monotonically non-decreasing even
//! though the durable column only moves once per flush cycle.

use dashmap::DashMap;
use galleria_core::types::{EntityId, EntityKind};

/// Ephemeral per-entity increment counters keyed by `(kind, id)`.
///
/// A single shared handle lives in `AppState`; the flush job holds a
/// second `Arc` to the same instance.
#[derive(Default)]
pub struct ViewCounter {
    pending: DashMap<(EntityKind, EntityId), i64>,
}

impl ViewCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one view. Atomic per key.
    pub fn increment(&self, kind: EntityKind, id: EntityId) {
        *self.pending.entry((kind, id)).or_insert(0) += 1;
    }

    /// Pending amount for one entity, zero when absent.
    pub fn pending(&self, kind: EntityKind, id: EntityId) -> i64 {
        self.pending.get(&(kind, id)).map(|v| *v).unwrap_or(0)
    }

    /// The client-visible total: durable counter plus pending buffer.
    pub fn read_total(&self, kind: EntityKind, id: EntityId, durable: i64) -> i64 {
        durable + self.pending(kind, id)
    }

    /// Remove and return every pending entry.
    ///
    /// Each key is removed before its amount is applied downstream, so an
    /// increment arriving mid-flush lands in a fresh entry and is carried
    /// to the next cycle instead of being lost or double counted.
    pub fn drain(&self) -> Vec<(EntityKind, EntityId, i64)> {
        let keys: Vec<_> = self.pending.iter().map(|entry| *entry.key()).collect();
        keys.into_iter()
            .filter_map(|key| {
                self.pending
                    .remove(&key)
                    .map(|((kind, id), amount)| (kind, id, amount))
            })
            .collect()
    }

    /// Re-credit a drained amount after a failed durable add, so the next
    /// flush cycle retries it.
    pub fn restore(&self, kind: EntityKind, id: EntityId, amount: i64) {
        *self.pending.entry((kind, id)).or_insert(0) += amount;
    }

    /// Number of entities with pending views.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
