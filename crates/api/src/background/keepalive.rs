//! Periodic database keep-alive.
//!
//! Some hosted PostgreSQL providers drop idle connections; a cheap
//! `SELECT 1` on a fixed interval keeps one warm. Fire-and-forget: a failed
//! ping is logged and the next tick tries again.

use std::time::Duration;

use makerslab_db::DbPool;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Run the keep-alive loop until `cancel` is triggered.
pub async fn run(pool: DbPool, every: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = every.as_secs(), "Database keep-alive started");

    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the pool was just health-checked.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Database keep-alive stopping");
                break;
            }
            _ = interval.tick() => {
                match makerslab_db::health_check(&pool).await {
                    Ok(()) => tracing::trace!("Database keep-alive ping ok"),
                    Err(e) => tracing::warn!(error = %e, "Database keep-alive ping failed"),
                }
            }
        }
    }
}
