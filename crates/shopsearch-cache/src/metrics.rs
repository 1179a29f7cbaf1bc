//! Per-tier hit/miss counters.
//!
//! The collector is an explicitly owned instance injected where it is
//! needed; there is no module-level global. Counters are the source of
//! truth for [`MetricsCollector::tier_metrics`]; each increment also emits
//! a `metrics` facade counter so a host process with a recorder installed
//! exports the same numbers.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::tier::CacheTier;

/// Metric names as constants for consistency.
pub mod names {
    pub const CACHE_HITS_TOTAL: &str = "search_cache_hits_total";
    pub const CACHE_MISSES_TOTAL: &str = "search_cache_misses_total";
}

#[derive(Default)]
struct TierCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Concurrent hit/miss counters, one pair per tier.
///
/// Counters live for the process lifetime and reset only on restart.
#[derive(Default)]
pub struct MetricsCollector {
    tiers: [TierCounters; CacheTier::ALL.len()],
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit for a tier.
    pub fn record_hit(&self, tier: CacheTier) {
        self.tiers[tier.index()].hits.fetch_add(1, Ordering::Relaxed);
        metrics::counter!(names::CACHE_HITS_TOTAL, "tier" => tier.as_str()).increment(1);
    }

    /// Records a cache miss for a tier.
    pub fn record_miss(&self, tier: CacheTier) {
        self.tiers[tier.index()]
            .misses
            .fetch_add(1, Ordering::Relaxed);
        metrics::counter!(names::CACHE_MISSES_TOTAL, "tier" => tier.as_str()).increment(1);
    }

    /// A point-in-time snapshot for one tier.
    pub fn tier_metrics(&self, tier: CacheTier) -> TierMetrics {
        let counters = &self.tiers[tier.index()];
        TierMetrics::new(
            counters.hits.load(Ordering::Relaxed),
            counters.misses.load(Ordering::Relaxed),
        )
    }

    /// Snapshots of every tier, in [`CacheTier::ALL`] order.
    pub fn snapshot(&self) -> Vec<(CacheTier, TierMetrics)> {
        CacheTier::ALL
            .iter()
            .map(|&tier| (tier, self.tier_metrics(tier)))
            .collect()
    }
}

/// A point-in-time snapshot of one tier's counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierMetrics {
    pub hits: u64,
    pub misses: u64,
    /// `hits / (hits + misses)`, `0.0` when no requests were recorded.
    pub hit_rate: f64,
}

impl TierMetrics {
    fn new(hits: u64, misses: u64) -> Self {
        let total = hits + misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };
        Self {
            hits,
            misses,
            hit_rate,
        }
    }
}
