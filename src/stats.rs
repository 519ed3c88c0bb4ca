use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Observability counters for the relay. The sanitization core never touches
/// these; the orchestrating handlers bump them after each classification.
pub struct RelayStats {
    started_at: Instant,
    total_connections: AtomicU64,
    active_connections: AtomicU64,
    messages_relayed: AtomicU64,
    injection_attempts: AtomicU64,
    media_shared: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub total_connections: u64,
    pub active_connections: u64,
    pub messages_relayed: u64,
    pub injection_attempts: u64,
    pub media_shared: u64,
    pub uptime_seconds: u64,
    pub uptime_formatted: String,
}

impl RelayStats {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            total_connections: AtomicU64::new(0),
            active_connections: AtomicU64::new(0),
            messages_relayed: AtomicU64::new(0),
            injection_attempts: AtomicU64::new(0),
            media_shared: AtomicU64::new(0),
        }
    }

    /// Returns the number of clients connected after this one joined.
    pub fn record_connection(&self) -> u64 {
        self.total_connections.fetch_add(1, Ordering::Relaxed);
        self.active_connections.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Returns the number of clients still connected.
    pub fn record_disconnect(&self) -> u64 {
        self.active_connections
            .fetch_sub(1, Ordering::Relaxed)
            .saturating_sub(1)
    }

    pub fn record_message(&self) {
        self.messages_relayed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_injection_attempt(&self) {
        self.injection_attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_media_shared(&self) {
        self.media_shared.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let uptime_seconds = self.started_at.elapsed().as_secs();
        StatsSnapshot {
            total_connections: self.total_connections.load(Ordering::Relaxed),
            active_connections: self.active_connections.load(Ordering::Relaxed),
            messages_relayed: self.messages_relayed.load(Ordering::Relaxed),
            injection_attempts: self.injection_attempts.load(Ordering::Relaxed),
            media_shared: self.media_shared.load(Ordering::Relaxed),
            uptime_seconds,
            uptime_formatted: format_uptime(uptime_seconds),
        }
    }
}

impl Default for RelayStats {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsSnapshot {
    /// Anything worth reporting in a periodic log line?
    pub fn has_activity(&self) -> bool {
        self.active_connections > 0 || self.messages_relayed > 0
    }
}

pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours}h {minutes}m {secs}s")
}
