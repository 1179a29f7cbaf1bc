//! Test doubles shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use shopsearch_cache::{CacheConfig, SearchCacheService};
use shopsearch_core::{
    AnalyticsError, FacetOptions, FacetSummary, PopularQuery, PopularityAnalytics, SearchError,
    SearchOptions, SearchResults, Searcher, SuggestOptions, Suggestion,
};
use shopsearch_core::{Facet, FacetValue, ProductHit};
use shopsearch_store::{CacheStore, MemoryStore, StoreError};

/// A store wrapping [`MemoryStore`] with injectable failures and a write
/// attempt counter.
pub struct FlakyStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of `set_with_expiry` attempts, failed ones included.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl CacheStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::connection("injected read failure"));
        }
        self.inner.get(key).await
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::connection("injected write failure"));
        }
        self.inner.set_with_expiry(key, value, ttl).await
    }

    async fn delete_by_pattern(&self, pattern: &str) -> Result<u64, StoreError> {
        self.inner.delete_by_pattern(pattern).await
    }

    fn backend_name(&self) -> &'static str {
        "flaky"
    }
}

/// A searcher returning canned results, failing on configured queries, and
/// counting invocations per method.
pub struct ScriptedSearcher {
    fail_queries: HashSet<String>,
    search_calls: AtomicUsize,
    suggest_calls: AtomicUsize,
    facet_calls: AtomicUsize,
}

impl ScriptedSearcher {
    pub fn healthy() -> Self {
        Self::failing_on(&[])
    }

    pub fn failing_on(queries: &[&str]) -> Self {
        Self {
            fail_queries: queries.iter().map(|q| q.to_string()).collect(),
            search_calls: AtomicUsize::new(0),
            suggest_calls: AtomicUsize::new(0),
            facet_calls: AtomicUsize::new(0),
        }
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn suggest_calls(&self) -> usize {
        self.suggest_calls.load(Ordering::SeqCst)
    }

    pub fn facet_calls(&self) -> usize {
        self.facet_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Searcher for ScriptedSearcher {
    async fn search(
        &self,
        options: &SearchOptions,
        _session_id: Option<&str>,
    ) -> Result<SearchResults, SearchError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries.contains(&options.query) {
            return Err(SearchError::engine(format!(
                "scripted failure for {:?}",
                options.query
            )));
        }
        Ok(results_for(&options.query))
    }

    async fn suggest(
        &self,
        options: &SuggestOptions,
        _session_id: Option<&str>,
    ) -> Result<Vec<Suggestion>, SearchError> {
        self.suggest_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries.contains(&options.prefix) {
            return Err(SearchError::engine(format!(
                "scripted failure for {:?}",
                options.prefix
            )));
        }
        Ok(vec![Suggestion {
            text: format!("{} sale", options.prefix),
            score: 0.9,
        }])
    }

    async fn facets(
        &self,
        options: &FacetOptions,
        _session_id: Option<&str>,
    ) -> Result<FacetSummary, SearchError> {
        self.facet_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries.contains(&options.query) {
            return Err(SearchError::engine(format!(
                "scripted failure for {:?}",
                options.query
            )));
        }
        Ok(facets_for(&options.query))
    }
}

/// An analytics source returning a fixed ranked list, recording the limit it
/// was last queried with.
pub struct ScriptedAnalytics {
    queries: Vec<PopularQuery>,
    fail: bool,
    last_limit: AtomicUsize,
}

impl ScriptedAnalytics {
    pub fn with_queries(queries: Vec<PopularQuery>) -> Self {
        Self {
            queries,
            fail: false,
            last_limit: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::with_queries(Vec::new())
    }

    pub fn failing() -> Self {
        Self {
            queries: Vec::new(),
            fail: true,
            last_limit: AtomicUsize::new(0),
        }
    }

    pub fn last_limit(&self) -> usize {
        self.last_limit.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PopularityAnalytics for ScriptedAnalytics {
    async fn top_queries(
        &self,
        limit: usize,
        _period_days: u32,
    ) -> Result<Vec<PopularQuery>, AnalyticsError> {
        self.last_limit.store(limit, Ordering::SeqCst);
        if self.fail {
            return Err(AnalyticsError::unavailable("injected analytics outage"));
        }
        Ok(self.queries.iter().take(limit).cloned().collect())
    }
}

pub fn results_for(query: &str) -> SearchResults {
    SearchResults {
        hits: vec![ProductHit {
            id: format!("sku-{query}"),
            title: format!("{query} (best match)"),
            price_cents: 4999,
            category: None,
            brand: Some("acme".to_string()),
            score: 1.0,
        }],
        total: 1,
        page: 1,
        per_page: 20,
    }
}

pub fn facets_for(query: &str) -> FacetSummary {
    FacetSummary {
        facets: vec![Facet {
            name: "brand".to_string(),
            values: vec![FacetValue {
                value: format!("{query}-brand"),
                count: 7,
            }],
        }],
    }
}

pub fn popular(query: &str, count: u64) -> PopularQuery {
    PopularQuery {
        query: query.to_string(),
        count,
    }
}

/// Wires a service over the given doubles with default configuration.
pub fn service_with(
    store: Arc<FlakyStore>,
    searcher: Arc<ScriptedSearcher>,
    analytics: Arc<ScriptedAnalytics>,
) -> SearchCacheService {
    SearchCacheService::new(store, searcher, analytics, CacheConfig::default())
}
