//! Async trait contracts for the subsystem's external collaborators.
//!
//! Both traits are object-safe and `Send + Sync` so implementations can be
//! shared across tasks behind `Arc<dyn ...>`. Implementations own their own
//! timeout and retry behavior; the cache layer imposes none.

use async_trait::async_trait;

use crate::error::{AnalyticsError, SearchError};
use crate::options::{FacetOptions, SearchOptions, SuggestOptions};
use crate::types::{FacetSummary, PopularQuery, SearchResults, Suggestion};

/// The search engine: pure, possibly expensive functions of their options.
///
/// `session_id` lets an engine attribute the request to a shopper session
/// for its own analytics; cache warming passes `None`.
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Executes a ranked product search.
    async fn search(
        &self,
        options: &SearchOptions,
        session_id: Option<&str>,
    ) -> Result<SearchResults, SearchError>;

    /// Produces typeahead suggestions for a partial query.
    async fn suggest(
        &self,
        options: &SuggestOptions,
        session_id: Option<&str>,
    ) -> Result<Vec<Suggestion>, SearchError>;

    /// Computes the facet breakdown for a query.
    async fn facets(
        &self,
        options: &FacetOptions,
        session_id: Option<&str>,
    ) -> Result<FacetSummary, SearchError>;
}

/// Read-only access to historical query popularity.
///
/// Consulted only by cache warming. The returned list is ranked by
/// descending frequency over a trailing window of `period_days`, restricted
/// to queries with at least one historical non-empty result, and holds at
/// most `limit` entries.
#[async_trait]
pub trait PopularityAnalytics: Send + Sync {
    async fn top_queries(
        &self,
        limit: usize,
        period_days: u32,
    ) -> Result<Vec<PopularQuery>, AnalyticsError>;
}
