use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::Instant;
use tracing::{info, info_span};

/// Process-wide tally of Riot API calls and how many of them failed.
#[derive(Debug)]
pub struct UpstreamMetrics {
    started: Instant,
    requests: AtomicU64,
    failures: AtomicU64,
}

/// Point in time view of [`UpstreamMetrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub failures: u64,
    pub per_minute: f64,
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Riot API calls, {} failed (avg {:.2} calls/min)",
            self.requests, self.failures, self.per_minute
        )
    }
}

impl UpstreamMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            started: Instant::now(),
            requests: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        })
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Non-200 answers, timeouts and undecodable bodies.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.requests.load(Ordering::Relaxed);
        let minutes = self.started.elapsed().as_secs_f64() / 60.0;

        MetricsSnapshot {
            requests,
            failures: self.failures.load(Ordering::Relaxed),
            per_minute: if minutes > 0.0 {
                requests as f64 / minutes
            } else {
                0.0
            },
        }
    }

    /// Logs a snapshot every `every`, skipping the immediate first tick.
    pub async fn log_loop(self: Arc<Self>, every: Duration) {
        let mut interval = tokio::time::interval(every);
        interval.tick().await;

        loop {
            interval.tick().await;
            let snapshot = self.snapshot();
            info_span!("📊").in_scope(|| {
                info!(
                    requests = snapshot.requests,
                    failures = snapshot.failures,
                    "{snapshot}"
                )
            });
        }
    }
}
