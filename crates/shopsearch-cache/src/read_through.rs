//! Read-through orchestration: get the cached value or compute and store it.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use shopsearch_core::CacheKeyed;
use shopsearch_store::DynCacheStore;

use crate::key;
use crate::metrics::MetricsCollector;
use crate::policy::TierPolicy;
use crate::tier::CacheTier;

/// The read-through cache over a [`CacheStore`](shopsearch_store::CacheStore).
///
/// The cache is best-effort, never authoritative: a store read failure
/// degrades to a miss and a store write failure is logged and dropped, so a
/// store outage means "always compute", never a user-visible error.
///
/// Concurrent callers missing on the same key will each run the fetcher and
/// each write the same value — a tolerated stampede. There is deliberately
/// no per-key locking or request coalescing here.
pub struct ReadThroughCache {
    store: DynCacheStore,
    policy: TierPolicy,
    metrics: Arc<MetricsCollector>,
}

impl ReadThroughCache {
    pub fn new(store: DynCacheStore, policy: TierPolicy, metrics: Arc<MetricsCollector>) -> Self {
        Self {
            store,
            policy,
            metrics,
        }
    }

    pub fn policy(&self) -> &TierPolicy {
        &self.policy
    }

    pub fn metrics(&self) -> &Arc<MetricsCollector> {
        &self.metrics
    }

    /// Returns the cached value for `options`, or computes it via `fetch`
    /// and stores it with the tier's TTL.
    ///
    /// A fetcher error propagates unchanged and nothing is written. The
    /// computed value is returned regardless of the write outcome.
    pub async fn get_or_set<T, E, F, Fut>(
        &self,
        tier: CacheTier,
        options: &impl CacheKeyed,
        fetch: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let cache_key = key::derive_key(tier, options);

        if let Some(value) = self.lookup(tier, &cache_key).await {
            self.metrics.record_hit(tier);
            return Ok(value);
        }

        self.metrics.record_miss(tier);
        let value = fetch().await?;
        self.write(tier, &cache_key, &value).await;
        Ok(value)
    }

    /// Computes nothing, records nothing: encodes `value` and writes it
    /// under the key derived from `options` with the tier's TTL.
    ///
    /// This is the warming write path — it shares the key derivation and
    /// serialization of organic requests but never touches the hit/miss
    /// counters, so warming is invisible in the metrics.
    pub async fn prime<T: Serialize>(
        &self,
        tier: CacheTier,
        options: &impl CacheKeyed,
        value: &T,
    ) {
        let cache_key = key::derive_key(tier, options);
        self.write(tier, &cache_key, value).await;
    }

    /// Store lookup with fail-open semantics: any store or decode problem
    /// comes back as `None` and the caller proceeds as on a plain miss.
    async fn lookup<T: DeserializeOwned>(&self, tier: CacheTier, cache_key: &str) -> Option<T> {
        let bytes = match self.store.get(cache_key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %cache_key, error = %e, "cache read failed, treating as miss");
                return None;
            }
        };

        match rmp_serde::from_slice(&bytes) {
            Ok(value) => {
                tracing::debug!(key = %cache_key, tier = %tier, "cache hit");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(key = %cache_key, error = %e, "failed to decode cached payload, dropping entry");
                // Best-effort removal; an exact key is also an exact pattern.
                if let Err(e) = self.store.delete_by_pattern(cache_key).await {
                    tracing::warn!(key = %cache_key, error = %e, "failed to drop undecodable entry");
                }
                None
            }
        }
    }

    async fn write<T: Serialize>(&self, tier: CacheTier, cache_key: &str, value: &T) {
        let bytes = match rmp_serde::to_vec(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(key = %cache_key, error = %e, "failed to encode payload for cache");
                return;
            }
        };

        let ttl = self.policy.ttl_for(tier);
        match self.store.set_with_expiry(cache_key, bytes, ttl).await {
            Ok(()) => {
                tracing::debug!(key = %cache_key, tier = %tier, ttl_secs = ttl.as_secs(), "cache set");
            }
            Err(e) => {
                tracing::warn!(key = %cache_key, error = %e, "cache write failed, returning computed value");
            }
        }
    }
}
