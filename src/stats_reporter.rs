use std::sync::Arc;
use tokio::time::Duration;

use crate::stats::RelayStats;

/// Periodically logs a counter snapshot, skipping quiet intervals.
///
/// Runs until the process stops; spawned next to the server future in `main`.
pub async fn run_reporter_until_stopped(stats: Arc<RelayStats>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick fires immediately; a report at startup says nothing
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let snapshot = stats.snapshot();
        if snapshot.has_activity() {
            tracing::info!(
                active_connections = snapshot.active_connections,
                messages_relayed = snapshot.messages_relayed,
                injection_attempts = snapshot.injection_attempts,
                media_shared = snapshot.media_shared,
                uptime = %snapshot.uptime_formatted,
                "Relay activity report"
            );
        }
    }
}
