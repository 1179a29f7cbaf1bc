//! Strongly-typed query options, one struct per cache tier.
//!
//! Cache keys are derived from these structs, so their serialization must
//! be canonical: logically identical options must always produce identical
//! bytes. Two properties guarantee that here:
//!
//! - each struct implements [`CacheKeyed::canonical_value`] explicitly,
//!   fixing exactly which fields participate in the key;
//! - `serde_json`'s default `Map` is BTree-backed, so object keys (both the
//!   literal field names and `BTreeMap` filter entries) always serialize in
//!   sorted order regardless of insertion order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Canonical-serialization seam for cache key derivation.
///
/// Implementations return a JSON value whose compact encoding is stable
/// across processes and insertion orders. Key derivation hashes that
/// encoding; it never hashes the struct's serde output directly.
pub trait CacheKeyed {
    /// The canonical JSON form of these options.
    fn canonical_value(&self) -> Value;
}

/// Result ordering for a product search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Relevance,
    PriceAsc,
    PriceDesc,
    Newest,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Relevance
    }
}

/// Options for a ranked product search (the `SearchResults` tier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub query: String,
    pub category: Option<String>,
    /// Attribute filters, e.g. `color=red`. A `BTreeMap` keeps filter
    /// ordering stable for key derivation.
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl SearchOptions {
    /// Options for a plain query with default paging and sorting.
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: None,
            filters: BTreeMap::new(),
            sort: SortOrder::default(),
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl CacheKeyed for SearchOptions {
    fn canonical_value(&self) -> Value {
        json!({
            "query": self.query,
            "category": self.category,
            "filters": self.filters,
            "sort": self.sort,
            "page": self.page,
            "per_page": self.per_page,
        })
    }
}

/// Options for typeahead suggestions (the `Suggestions` tier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestOptions {
    /// The partial query the shopper has typed so far.
    pub prefix: String,
    #[serde(default = "default_suggest_limit")]
    pub limit: u32,
}

fn default_suggest_limit() -> u32 {
    10
}

impl SuggestOptions {
    pub fn for_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            limit: default_suggest_limit(),
        }
    }
}

impl CacheKeyed for SuggestOptions {
    fn canonical_value(&self) -> Value {
        json!({
            "prefix": self.prefix,
            "limit": self.limit,
        })
    }
}

/// Options for a facet breakdown (the `Facets` tier).
///
/// Deliberately excludes paging and sorting: facet counts are a property of
/// the matching set, not of any result page, so all pages of one query
/// share a single facet entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub query: String,
    pub category: Option<String>,
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
}

impl FacetOptions {
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: None,
            filters: BTreeMap::new(),
        }
    }
}

impl CacheKeyed for FacetOptions {
    fn canonical_value(&self) -> Value {
        json!({
            "query": self.query,
            "category": self.category,
            "filters": self.filters,
        })
    }
}

/// Options for the storefront's global search box (the `GlobalSearch` tier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSearchOptions {
    pub query: String,
    /// Per-section truncation for products/categories/brands.
    #[serde(default = "default_section_limit")]
    pub limit_per_section: u32,
}

fn default_section_limit() -> u32 {
    5
}

impl GlobalSearchOptions {
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit_per_section: default_section_limit(),
        }
    }
}

impl CacheKeyed for GlobalSearchOptions {
    fn canonical_value(&self) -> Value {
        json!({
            "query": self.query,
            "limit_per_section": self.limit_per_section,
        })
    }
}
