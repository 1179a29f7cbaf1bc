//! Multi-tier read-through caching for the ShopSearch product-search service.
//!
//! ## Architecture
//!
//! ```text
//! handler → get_or_set(tier, options, fetcher)
//!               │
//!               ├─ KeyDeriver     deterministic "{tier}:{scope}:{digest}" keys
//!               ├─ CacheStore     get / set-with-expiry / delete-by-pattern
//!               ├─ TierPolicy     per-tier TTL, hot-reloadable config
//!               └─ Metrics        per-tier hit/miss counters
//!
//! warmer (background) → analytics top queries → searcher → store writes
//! ```
//!
//! Four tiers — search results, suggestions, facets, global search — each
//! with an independent TTL, key namespace and counters.
//!
//! ## Failure policy
//!
//! The cache fails open: a store outage degrades to "always compute" and is
//! never visible to shoppers. Fetcher errors propagate unchanged. Warming
//! failures are visible only to operators, via the returned report and
//! logs.

pub mod config;
pub mod invalidation;
pub mod key;
pub mod metrics;
pub mod policy;
pub mod read_through;
pub mod service;
pub mod tier;
pub mod warmer;

pub use config::{CacheConfig, TierTtlConfig, WarmerConfig};
pub use invalidation::InvalidationManager;
pub use key::{KEY_SCHEMA_VERSION, derive_key, tier_pattern};
pub use metrics::{MetricsCollector, TierMetrics};
pub use policy::TierPolicy;
pub use read_through::ReadThroughCache;
pub use service::SearchCacheService;
pub use tier::CacheTier;
pub use warmer::{CacheWarmer, ProgressFn, WarmFailure, WarmReport, WarmRequest, WarmerError};
