//! Cache configuration with serde defaults.
//!
//! Every field is defaulted so a completely empty config deserializes to a
//! working setup; deployments override only what they tune.

use serde::{Deserialize, Serialize};

use crate::tier::CacheTier;

/// Top-level configuration for the cache subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub tiers: TierTtlConfig,
    #[serde(default)]
    pub warmer: WarmerConfig,
}

/// Per-tier TTLs, in seconds.
///
/// Tiers legitimately diverge: facets change less often than ranked
/// results and tolerate a longer TTL, while suggestions must track catalog
/// changes tightly and get the shortest one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierTtlConfig {
    #[serde(default = "default_search_results_secs")]
    pub search_results_secs: u64,
    #[serde(default = "default_suggestions_secs")]
    pub suggestions_secs: u64,
    #[serde(default = "default_facets_secs")]
    pub facets_secs: u64,
    #[serde(default = "default_global_search_secs")]
    pub global_search_secs: u64,
}

fn default_search_results_secs() -> u64 {
    300
}

fn default_suggestions_secs() -> u64 {
    120
}

fn default_facets_secs() -> u64 {
    900
}

fn default_global_search_secs() -> u64 {
    300
}

impl Default for TierTtlConfig {
    fn default() -> Self {
        Self {
            search_results_secs: default_search_results_secs(),
            suggestions_secs: default_suggestions_secs(),
            facets_secs: default_facets_secs(),
            global_search_secs: default_global_search_secs(),
        }
    }
}

impl TierTtlConfig {
    /// The configured TTL for a tier, in seconds.
    pub fn ttl_secs(&self, tier: CacheTier) -> u64 {
        match tier {
            CacheTier::SearchResults => self.search_results_secs,
            CacheTier::Suggestions => self.suggestions_secs,
            CacheTier::Facets => self.facets_secs,
            CacheTier::GlobalSearch => self.global_search_secs,
        }
    }
}

/// Settings for the popular-query warming job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarmerConfig {
    /// How many popular queries a run warms when the caller does not say.
    #[serde(default = "default_top_queries")]
    pub default_top_queries: usize,
    /// Hard ceiling on queries per run, regardless of what the caller
    /// requests. Bounds the worst-case cost of one run.
    #[serde(default = "default_max_top_queries")]
    pub max_top_queries: usize,
    /// Trailing analytics window, in days.
    #[serde(default = "default_period_days")]
    pub default_period_days: u32,
    /// Interval between scheduled warm runs.
    #[serde(default = "default_warm_interval_secs")]
    pub interval_secs: u64,
}

fn default_top_queries() -> usize {
    50
}

fn default_max_top_queries() -> usize {
    200
}

fn default_period_days() -> u32 {
    7
}

fn default_warm_interval_secs() -> u64 {
    3600
}

impl Default for WarmerConfig {
    fn default() -> Self {
        Self {
            default_top_queries: default_top_queries(),
            max_top_queries: default_max_top_queries(),
            default_period_days: default_period_days(),
            interval_secs: default_warm_interval_secs(),
        }
    }
}
