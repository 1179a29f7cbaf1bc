//! Background cache warming for historically popular queries.
//!
//! Warming eliminates cold-cache latency for high-value queries by
//! recomputing and storing their entries before they are requested. A run
//! fetches the ranked popular-query list from analytics, then processes it
//! strictly sequentially — one in-flight warm operation at a time — so a
//! run can never stampede the search engine or the store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use shopsearch_core::{
    AnalyticsError, FacetOptions, PopularityAnalytics, SearchError, SearchOptions, Searcher,
    SuggestOptions,
};

use crate::read_through::ReadThroughCache;
use crate::tier::CacheTier;

/// The only error a warm run can return: without the popular-query list
/// there is nothing to warm. Every per-query failure is captured in the
/// run's [`WarmReport`] instead.
#[derive(Debug, thiserror::Error)]
pub enum WarmerError {
    #[error("failed to fetch popular queries: {0}")]
    Analytics(#[from] AnalyticsError),
}

/// Caller overrides for one warm run; `None` falls back to configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarmRequest {
    pub top_queries: Option<usize>,
    pub period_days: Option<u32>,
}

/// A query that failed to warm, with the error it failed on.
#[derive(Debug, Clone)]
pub struct WarmFailure {
    pub query: String,
    pub error: String,
}

/// The immutable outcome of one warm run.
#[derive(Debug, Clone)]
pub struct WarmReport {
    pub total: usize,
    pub warmed: usize,
    pub failed: usize,
    pub duration: Duration,
    pub errors: Vec<WarmFailure>,
}

/// Progress callback, invoked as `(processed, total)` after each query.
pub type ProgressFn = dyn Fn(usize, usize) + Send + Sync;

/// The popular-query warming job.
pub struct CacheWarmer {
    searcher: Arc<dyn Searcher>,
    analytics: Arc<dyn PopularityAnalytics>,
    cache: Arc<ReadThroughCache>,
}

impl CacheWarmer {
    pub fn new(
        searcher: Arc<dyn Searcher>,
        analytics: Arc<dyn PopularityAnalytics>,
        cache: Arc<ReadThroughCache>,
    ) -> Self {
        Self {
            searcher,
            analytics,
            cache,
        }
    }

    /// Runs one warm pass over the current popular queries.
    ///
    /// `top_queries` is clamped to the configured hard ceiling regardless
    /// of what the caller asks for. An empty popularity result is a
    /// zero-valued report, not an error; a failing query is recorded and
    /// skipped, never aborting the run.
    pub async fn warm_popular_queries(
        &self,
        request: WarmRequest,
        progress: Option<&ProgressFn>,
    ) -> Result<WarmReport, WarmerError> {
        let started = Instant::now();
        let config = self.cache.policy().current().warmer.clone();

        let limit = request
            .top_queries
            .unwrap_or(config.default_top_queries)
            .min(config.max_top_queries);
        let period_days = request.period_days.unwrap_or(config.default_period_days);

        let queries = self.analytics.top_queries(limit, period_days).await?;
        let total = queries.len();

        if queries.is_empty() {
            tracing::info!(period_days, "no popular queries to warm");
            return Ok(WarmReport {
                total: 0,
                warmed: 0,
                failed: 0,
                duration: started.elapsed(),
                errors: Vec::new(),
            });
        }

        tracing::info!(total, period_days, "starting cache warm run");

        let mut warmed = 0;
        let mut errors = Vec::new();

        for (processed, popular) in queries.iter().enumerate() {
            match self.warm_query(&popular.query).await {
                Ok(()) => warmed += 1,
                Err(e) => {
                    tracing::warn!(query = %popular.query, error = %e, "failed to warm query");
                    errors.push(WarmFailure {
                        query: popular.query.clone(),
                        error: e.to_string(),
                    });
                }
            }

            if let Some(callback) = progress {
                callback(processed + 1, total);
            }
        }

        let report = WarmReport {
            total,
            warmed,
            failed: errors.len(),
            duration: started.elapsed(),
            errors,
        };

        tracing::info!(
            total = report.total,
            warmed = report.warmed,
            failed = report.failed,
            duration_ms = report.duration.as_millis() as u64,
            "cache warm run finished"
        );

        Ok(report)
    }

    /// Computes and stores entries for all three warmed tiers of one query,
    /// writing directly to the store so warming never shows up in the
    /// organic hit/miss counters.
    async fn warm_query(&self, query: &str) -> Result<(), SearchError> {
        let search_options = SearchOptions::for_query(query);
        let results = self.searcher.search(&search_options, None).await?;
        self.cache
            .prime(CacheTier::SearchResults, &search_options, &results)
            .await;

        let facet_options = FacetOptions::for_query(query);
        let facets = self.searcher.facets(&facet_options, None).await?;
        self.cache
            .prime(CacheTier::Facets, &facet_options, &facets)
            .await;

        let suggest_options = SuggestOptions::for_prefix(query);
        let suggestions = self.searcher.suggest(&suggest_options, None).await?;
        self.cache
            .prime(CacheTier::Suggestions, &suggest_options, &suggestions)
            .await;

        Ok(())
    }

    /// Starts a scheduled warming task running a pass every `every`.
    ///
    /// Reports are logged, never returned. Aborting the handle cancels the
    /// schedule between runs; an in-progress pass runs to completion.
    pub fn start_interval(self: Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);

            loop {
                interval.tick().await;

                match self
                    .warm_popular_queries(WarmRequest::default(), None)
                    .await
                {
                    Ok(report) => {
                        tracing::debug!(
                            warmed = report.warmed,
                            failed = report.failed,
                            "scheduled warm run finished"
                        );
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "scheduled warm run failed");
                    }
                }
            }
        })
    }
}
