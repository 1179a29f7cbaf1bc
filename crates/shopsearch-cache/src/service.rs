//! The facade calling code wires into request handlers.

use std::future::Future;
use std::sync::Arc;

use shopsearch_core::{
    FacetOptions, FacetSummary, GlobalSearchOptions, GlobalSearchResults, PopularityAnalytics,
    SearchOptions, SearchResults, Searcher, SuggestOptions, Suggestion,
};
use shopsearch_store::DynCacheStore;

use crate::config::CacheConfig;
use crate::invalidation::InvalidationManager;
use crate::metrics::{MetricsCollector, TierMetrics};
use crate::policy::TierPolicy;
use crate::read_through::ReadThroughCache;
use crate::tier::CacheTier;
use crate::warmer::{CacheWarmer, ProgressFn, WarmReport, WarmRequest, WarmerError};

/// One-stop entry point for the cache subsystem.
///
/// Owns the read-through cache, invalidation manager, metrics collector and
/// warmer, wired over a shared store. Handlers call the typed per-tier
/// `get_or_set_*` methods with a fetcher closure; mutation paths call the
/// `invalidate_*` methods; operators read `tier_metrics` and trigger
/// `warm_popular_queries`.
pub struct SearchCacheService {
    cache: Arc<ReadThroughCache>,
    invalidation: InvalidationManager,
    warmer: Arc<CacheWarmer>,
}

impl SearchCacheService {
    pub fn new(
        store: DynCacheStore,
        searcher: Arc<dyn Searcher>,
        analytics: Arc<dyn PopularityAnalytics>,
        config: CacheConfig,
    ) -> Self {
        let policy = TierPolicy::new(config);
        let metrics = Arc::new(MetricsCollector::new());
        let cache = Arc::new(ReadThroughCache::new(
            Arc::clone(&store),
            policy,
            metrics,
        ));
        let invalidation = InvalidationManager::new(store);
        let warmer = Arc::new(CacheWarmer::new(searcher, analytics, Arc::clone(&cache)));

        Self {
            cache,
            invalidation,
            warmer,
        }
    }

    // ==================== Read-through entry points ====================

    pub async fn get_or_set_search_results<E, F, Fut>(
        &self,
        options: &SearchOptions,
        fetch: F,
    ) -> Result<SearchResults, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SearchResults, E>>,
    {
        self.cache
            .get_or_set(CacheTier::SearchResults, options, fetch)
            .await
    }

    pub async fn get_or_set_suggestions<E, F, Fut>(
        &self,
        options: &SuggestOptions,
        fetch: F,
    ) -> Result<Vec<Suggestion>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Suggestion>, E>>,
    {
        self.cache
            .get_or_set(CacheTier::Suggestions, options, fetch)
            .await
    }

    pub async fn get_or_set_facets<E, F, Fut>(
        &self,
        options: &FacetOptions,
        fetch: F,
    ) -> Result<FacetSummary, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<FacetSummary, E>>,
    {
        self.cache.get_or_set(CacheTier::Facets, options, fetch).await
    }

    pub async fn get_or_set_global_search<E, F, Fut>(
        &self,
        options: &GlobalSearchOptions,
        fetch: F,
    ) -> Result<GlobalSearchResults, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<GlobalSearchResults, E>>,
    {
        self.cache
            .get_or_set(CacheTier::GlobalSearch, options, fetch)
            .await
    }

    // ==================== Invalidation ====================

    pub async fn invalidate_search(&self, sub_pattern: &str) -> u64 {
        self.invalidation
            .invalidate(CacheTier::SearchResults, sub_pattern)
            .await
    }

    pub async fn invalidate_suggestions(&self, sub_pattern: &str) -> u64 {
        self.invalidation
            .invalidate(CacheTier::Suggestions, sub_pattern)
            .await
    }

    pub async fn invalidate_facets(&self, sub_pattern: &str) -> u64 {
        self.invalidation
            .invalidate(CacheTier::Facets, sub_pattern)
            .await
    }

    pub async fn invalidate_global_search(&self, sub_pattern: &str) -> u64 {
        self.invalidation
            .invalidate(CacheTier::GlobalSearch, sub_pattern)
            .await
    }

    /// Invalidates across every tier.
    pub async fn invalidate_all(&self, sub_pattern: &str) -> u64 {
        self.invalidation.invalidate_all(sub_pattern).await
    }

    // ==================== Metrics ====================

    pub fn tier_metrics(&self, tier: CacheTier) -> TierMetrics {
        self.cache.metrics().tier_metrics(tier)
    }

    pub fn metrics_snapshot(&self) -> Vec<(CacheTier, TierMetrics)> {
        self.cache.metrics().snapshot()
    }

    // ==================== Warming ====================

    pub async fn warm_popular_queries(
        &self,
        request: WarmRequest,
        progress: Option<&ProgressFn>,
    ) -> Result<WarmReport, WarmerError> {
        self.warmer.warm_popular_queries(request, progress).await
    }

    /// The warmer, for hosts that schedule it via
    /// [`CacheWarmer::start_interval`].
    pub fn warmer(&self) -> Arc<CacheWarmer> {
        Arc::clone(&self.warmer)
    }

    /// The TTL policy handle, for hosts that hot-swap configuration.
    pub fn policy(&self) -> &TierPolicy {
        self.cache.policy()
    }
}
