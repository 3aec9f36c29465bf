// src/server/metrics.rs
//! Server metrics tracking
//!
//! Simple atomic counters for request statistics, exposed through the
//! admin stats endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Server metrics collector
#[derive(Default)]
pub struct ServerMetrics {
    /// Total requests
    requests_total: AtomicU64,
    /// Lookups that found a recipe
    lookup_hits: AtomicU64,
    /// Lookups for an unknown id
    lookup_misses: AtomicU64,
    /// Searches served
    searches: AtomicU64,
    /// Recipes created
    creates: AtomicU64,
    /// Requests rejected by input validation
    rejections: AtomicU64,
    /// Server start time
    start_time: std::sync::OnceLock<Instant>,
}

impl ServerMetrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        let metrics = Self::default();
        let _ = metrics.start_time.set(Instant::now());
        metrics
    }

    /// Record any incoming request
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_search(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_create(&self) {
        self.creates.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request rejected before reaching the store
    pub fn record_rejection(&self) {
        self.rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let uptime = self
            .start_time
            .get()
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);

        let hits = self.lookup_hits.load(Ordering::Relaxed);
        let misses = self.lookup_misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            lookup_hits: hits,
            lookup_misses: misses,
            hit_rate,
            searches: self.searches.load(Ordering::Relaxed),
            creates: self.creates.load(Ordering::Relaxed),
            rejections: self.rejections.load(Ordering::Relaxed),
            uptime_secs: uptime.as_secs(),
        }
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Total requests processed
    pub requests_total: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,
    /// Lookup hit rate percentage
    pub hit_rate: f64,
    pub searches: u64,
    pub creates: u64,
    /// Requests rejected by validation
    pub rejections: u64,
    /// Server uptime in seconds
    pub uptime_secs: u64,
}
