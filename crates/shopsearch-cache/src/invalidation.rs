//! Pattern-based cache invalidation.
//!
//! Used after catalog mutations that make cached results stale. Deletion is
//! best-effort: a store failure is logged and reported as zero removals,
//! never returned as an error — entries left behind self-heal via TTL
//! expiry.

use shopsearch_store::DynCacheStore;

use crate::key;
use crate::tier::CacheTier;

/// Deletes cache entries by tier and pattern.
pub struct InvalidationManager {
    store: DynCacheStore,
}

impl InvalidationManager {
    pub fn new(store: DynCacheStore) -> Self {
        Self { store }
    }

    /// Deletes all entries in a tier's namespace matching `sub_pattern`
    /// (glob, `*` wildcard). Returns the number of entries removed.
    pub async fn invalidate(&self, tier: CacheTier, sub_pattern: &str) -> u64 {
        let pattern = key::tier_pattern(tier, sub_pattern);
        match self.store.delete_by_pattern(&pattern).await {
            Ok(removed) => {
                tracing::debug!(tier = %tier, pattern = %pattern, removed, "cache invalidated");
                removed
            }
            Err(e) => {
                tracing::warn!(
                    tier = %tier,
                    pattern = %pattern,
                    error = %e,
                    "cache invalidation failed, entries will expire via TTL"
                );
                0
            }
        }
    }

    /// Deletes a tier's entire namespace.
    pub async fn invalidate_tier(&self, tier: CacheTier) -> u64 {
        self.invalidate(tier, "*").await
    }

    /// Applies `sub_pattern` invalidation across every tier. Returns the
    /// total number of entries removed.
    pub async fn invalidate_all(&self, sub_pattern: &str) -> u64 {
        let mut removed = 0;
        for tier in CacheTier::ALL {
            removed += self.invalidate(tier, sub_pattern).await;
        }
        removed
    }
}
