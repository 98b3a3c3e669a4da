//! Dispatch metrics for observability

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a single logger
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Lines written to the local sink
    emitted_count: AtomicU64,
    /// Records dropped by the level gate
    discarded_count: AtomicU64,
    /// Successful remote posts
    remote_post_count: AtomicU64,
    /// Failed remote posts
    remote_failure_count: AtomicU64,
}

impl DispatchMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get emitted line count
    pub fn emitted_count(&self) -> u64 {
        self.emitted_count.load(Ordering::Relaxed)
    }

    /// Increment emitted line count
    pub fn inc_emitted_count(&self) {
        self.emitted_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get discarded record count
    pub fn discarded_count(&self) -> u64 {
        self.discarded_count.load(Ordering::Relaxed)
    }

    /// Increment discarded record count
    pub fn inc_discarded_count(&self) {
        self.discarded_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get successful remote post count
    pub fn remote_post_count(&self) -> u64 {
        self.remote_post_count.load(Ordering::Relaxed)
    }

    /// Increment successful remote post count
    pub fn inc_remote_post_count(&self) {
        self.remote_post_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get failed remote post count
    pub fn remote_failure_count(&self) -> u64 {
        self.remote_failure_count.load(Ordering::Relaxed)
    }

    /// Increment failed remote post count
    pub fn inc_remote_failure_count(&self) {
        self.remote_failure_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            emitted_count: self.emitted_count(),
            discarded_count: self.discarded_count(),
            remote_post_count: self.remote_post_count(),
            remote_failure_count: self.remote_failure_count(),
        }
    }
}

/// Snapshot of dispatch metrics (for reporting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub emitted_count: u64,
    pub discarded_count: u64,
    pub remote_post_count: u64,
    pub remote_failure_count: u64,
}

impl MetricsSnapshot {
    /// Remote attempts, successful or not
    pub fn remote_attempts(&self) -> u64 {
        self.remote_post_count + self.remote_failure_count
    }
}
