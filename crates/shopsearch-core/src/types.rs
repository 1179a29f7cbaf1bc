//! Data carriers exchanged between the cache subsystem and its collaborators.
//!
//! Everything here is a plain serde-serializable value: the cache stores
//! these types as opaque encoded payloads and never inspects them beyond
//! encode/decode.

use serde::{Deserialize, Serialize};

/// A single product hit in a search result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductHit {
    pub id: String,
    pub title: String,
    /// Price in minor currency units.
    pub price_cents: u64,
    pub category: Option<String>,
    pub brand: Option<String>,
    /// Engine-assigned relevance score for this hit.
    pub score: f64,
}

/// One page of ranked search results as returned by the search engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub hits: Vec<ProductHit>,
    /// Total matching products across all pages.
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl SearchResults {
    /// An empty result page.
    pub fn empty(page: u32, per_page: u32) -> Self {
        Self {
            hits: Vec::new(),
            total: 0,
            page,
            per_page,
        }
    }

    /// Returns `true` if this page carries no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// A typeahead suggestion for a partial query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    /// Engine-assigned completion score.
    pub score: f64,
}

/// A single facet value with its matching-product count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub count: u64,
}

/// A facet dimension (e.g. `brand`, `color`) with its value breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    pub values: Vec<FacetValue>,
}

/// The complete facet breakdown for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSummary {
    pub facets: Vec<Facet>,
}

impl FacetSummary {
    /// A summary with no facets.
    pub fn empty() -> Self {
        Self { facets: Vec::new() }
    }
}

/// Cross-section results for the storefront's global search box.
///
/// Unlike [`SearchResults`], this spans products, categories and brands in
/// one response, each section independently truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSearchResults {
    pub products: Vec<ProductHit>,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
}

/// A historically frequent query, as reported by the analytics source.
///
/// Read-only input to cache warming; ranked by descending `count` over the
/// analytics trailing window. Not owned or persisted by this subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularQuery {
    pub query: String,
    pub count: u64,
}
