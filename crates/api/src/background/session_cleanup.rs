//! Periodic purge of expired admin sessions.

use std::sync::Arc;
use std::time::Duration;

use makerslab_db::store::ContentStore;
use tokio_util::sync::CancellationToken;

/// How often the cleanup job runs.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Run the session cleanup loop until `cancel` is triggered.
pub async fn run(store: Arc<dyn ContentStore>, every: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = every.as_secs(), "Session cleanup job started");

    let mut interval = tokio::time::interval(every);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session cleanup job stopping");
                break;
            }
            _ = interval.tick() => {
                match store.sessions().delete_expired_sessions().await {
                    Ok(0) => tracing::debug!("Session cleanup: nothing to purge"),
                    Ok(deleted) => tracing::info!(deleted, "Session cleanup: purged expired sessions"),
                    Err(e) => tracing::error!(error = %e, "Session cleanup failed"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, Utc};
    use makerslab_core::session::SessionState;
    use makerslab_db::models::session::CreateSession;
    use makerslab_db::store::memory::MemoryContentStore;

    use super::*;

    #[tokio::test]
    async fn purges_expired_sessions_then_stops_on_cancel() {
        let store = Arc::new(MemoryContentStore::new());
        store
            .sessions()
            .create_session(&CreateSession {
                token_hash: "old".into(),
                state: SessionState::Authenticated,
                expires_at: Utc::now() - ChronoDuration::minutes(5),
            })
            .await
            .unwrap();

        let cancel = CancellationToken::new();
        let task = tokio::spawn(run(
            store.clone() as Arc<dyn ContentStore>,
            Duration::from_millis(10),
            cancel.clone(),
        ));

        for _ in 0..100 {
            if store.session_count().await == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(store.session_count().await, 0);

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("task should stop after cancel")
            .unwrap();
    }
}
