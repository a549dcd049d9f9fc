//! Periodic flush of the pending view-count buffer into the durable
//! `views` columns.
//!
//! Runs on a fixed interval using `tokio::time::interval`. Each cycle
//! drains the buffer key by key: the entry is removed first, then its
//! amount is added to the durable counter, so an increment arriving
//! mid-flush lands in a fresh entry for the next cycle. A failed durable
//! add re-credits the drained amount; there is no retry within a cycle --
//! the next scheduled run re-attempts naturally.

use std::sync::Arc;
use std::time::Duration;

use galleria_core::types::EntityKind;
use galleria_db::repositories::{CollectionRepo, MediaRepo};
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crate::counters::ViewCounter;

/// Run the view-count flush loop until `cancel` is triggered.
pub async fn run(
    pool: PgPool,
    counter: Arc<ViewCounter>,
    interval: Duration,
    cancel: CancellationToken,
) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "View-count flush job started"
    );

    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately; consume it so the first real
    // flush happens one full interval after startup.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("View-count flush job stopping");
                break;
            }
            _ = ticker.tick() => {
                flush_once(&pool, &counter).await;
            }
        }
    }
}

/// Flush every pending entry once.
///
/// Also called directly during graceful shutdown so buffered counts
/// survive a clean restart.
pub async fn flush_once(pool: &PgPool, counter: &ViewCounter) {
    let drained = counter.drain();
    if drained.is_empty() {
        tracing::debug!("View-count flush: nothing pending");
        return;
    }

    let mut flushed = 0usize;
    let mut failed = 0usize;

    for (kind, id, amount) in drained {
        let result = match kind {
            EntityKind::Collection => CollectionRepo::add_views(pool, id, amount).await,
            EntityKind::Media => MediaRepo::add_views(pool, id, amount).await,
        };

        match result {
            Ok(true) => flushed += 1,
            Ok(false) => {
                // The row vanished out-of-band; the buffered count has
                // nowhere to go.
                tracing::warn!(entity = kind.as_str(), %id, amount, "View-count flush: row missing, dropping count");
            }
            Err(err) => {
                failed += 1;
                counter.restore(kind, id, amount);
                tracing::error!(
                    error = %err,
                    entity = kind.as_str(),
                    %id,
                    amount,
                    "View-count flush: durable add failed, re-credited for next cycle"
                );
            }
        }
    }

    tracing::info!(flushed, failed, "View-count flush completed");
}
