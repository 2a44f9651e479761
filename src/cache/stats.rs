//! Cache Statistics Module
//!
//! Tracks lookup outcomes (hits, not-found misses, expired misses) with
//! atomic counters so recording works from any thread without a lock.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Lock-free lookup counters owned by the cache.
///
/// Counters are individually atomic; a snapshot taken under concurrent load is
/// approximate but each counter is monotonically consistent.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups that returned a fresh value
    hits: AtomicU64,
    /// Lookups for a key that was never present
    misses: AtomicU64,
    /// Lookups that found the key but past its deadline
    expired: AtomicU64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the not-found counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Expired ==
    /// Increments the expired-lookup counter.
    pub fn record_expired(&self) {
        self.expired.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Captures the current counter values.
    pub fn snapshot(&self, total_entries: usize) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired: self.expired.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Stats Snapshot ==
/// A point-in-time copy of the cache counters, suitable for reporting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsSnapshot {
    /// Number of lookups that returned a fresh value
    pub hits: u64,
    /// Number of lookups for keys never present
    pub misses: u64,
    /// Number of lookups that found an expired entry
    pub expired: u64,
    /// Number of entries in the cache at snapshot time
    pub total_entries: usize,
}

impl StatsSnapshot {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses + expired), or 0.0 if no lookups have
    /// been made. Expired lookups count as misses for rate purposes.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses + self.expired;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
