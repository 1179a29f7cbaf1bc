//! Core types and collaborator contracts for the ShopSearch cache subsystem.
//!
//! This crate holds the domain data model (search results, suggestions,
//! facets, popularity data), the strongly-typed per-tier query option
//! structs with their canonical serialization, and the async traits for the
//! external collaborators (the search engine and the popularity analytics
//! source). It contains no caching logic of its own.

pub mod collaborators;
pub mod error;
pub mod options;
pub mod types;

pub use collaborators::{PopularityAnalytics, Searcher};
pub use error::{AnalyticsError, SearchError};
pub use options::{
    CacheKeyed, FacetOptions, GlobalSearchOptions, SearchOptions, SortOrder, SuggestOptions,
};
pub use types::{
    Facet, FacetSummary, FacetValue, GlobalSearchResults, PopularQuery, ProductHit, SearchResults,
    Suggestion,
};
