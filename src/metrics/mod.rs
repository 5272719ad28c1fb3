//! Basic metrics instrumentation for dispatch activity.
//!
//! Provides counters for dispatch passes and per-campaign outcomes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for the dispatch worker.
#[derive(Debug, Clone, Default)]
pub struct DispatchMetrics {
    /// Total number of dispatch passes run
    passes_total: Arc<AtomicU64>,

    /// Total number of campaigns picked up for dispatch
    campaigns_dispatched_total: Arc<AtomicU64>,

    /// Total number of campaigns whose start transition failed
    start_failures_total: Arc<AtomicU64>,
}

/// Point-in-time snapshot of the dispatch counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSummary {
    pub passes_total: u64,
    pub campaigns_dispatched_total: u64,
    pub start_failures_total: u64,
}

impl DispatchMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed pass and how many campaigns it picked up.
    pub fn record_pass(&self, campaigns: usize) {
        self.passes_total.fetch_add(1, Ordering::Relaxed);
        self.campaigns_dispatched_total
            .fetch_add(campaigns as u64, Ordering::Relaxed);
    }

    /// Record a campaign that could not be started.
    pub fn record_start_failure(&self) {
        self.start_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            passes_total: self.passes_total.load(Ordering::Relaxed),
            campaigns_dispatched_total: self.campaigns_dispatched_total.load(Ordering::Relaxed),
            start_failures_total: self.start_failures_total.load(Ordering::Relaxed),
        }
    }
}
