//! TTL policy resolution with hot-reloadable configuration.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;

use crate::config::CacheConfig;
use crate::tier::CacheTier;

/// Resolves per-tier TTLs from the current configuration.
///
/// The config lives behind an `ArcSwap`, so reads are lock-free and every
/// resolution sees the latest snapshot: swapping in a new config takes
/// effect on the next write without a restart. Clones share the same
/// underlying config.
#[derive(Clone)]
pub struct TierPolicy {
    config: Arc<ArcSwap<CacheConfig>>,
}

impl TierPolicy {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// The TTL for a tier, resolved fresh from the current config.
    ///
    /// Always positive: a zero in the config is lifted to one second so an
    /// entry can never be written already expired.
    pub fn ttl_for(&self, tier: CacheTier) -> Duration {
        let secs = self.config.load().tiers.ttl_secs(tier).max(1);
        Duration::from_secs(secs)
    }

    /// Replaces the configuration; takes effect immediately.
    pub fn update(&self, config: CacheConfig) {
        self.config.store(Arc::new(config));
    }

    /// The current configuration snapshot.
    pub fn current(&self) -> Arc<CacheConfig> {
        self.config.load_full()
    }
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_configured_ttls() {
        let policy = TierPolicy::default();
        assert_eq!(policy.ttl_for(CacheTier::Facets), Duration::from_secs(900));
        assert_eq!(
            policy.ttl_for(CacheTier::Suggestions),
            Duration::from_secs(120)
        );
    }

    #[test]
    fn update_takes_effect_without_restart() {
        let policy = TierPolicy::default();

        let mut config = CacheConfig::default();
        config.tiers.facets_secs = 60;
        policy.update(config);

        assert_eq!(policy.ttl_for(CacheTier::Facets), Duration::from_secs(60));
    }

    #[test]
    fn zero_ttl_is_lifted_to_one_second() {
        let mut config = CacheConfig::default();
        config.tiers.suggestions_secs = 0;
        let policy = TierPolicy::new(config);

        assert_eq!(
            policy.ttl_for(CacheTier::Suggestions),
            Duration::from_secs(1)
        );
    }
}
