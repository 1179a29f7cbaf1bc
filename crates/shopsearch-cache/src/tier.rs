//! Cache tier namespaces.

use serde::{Deserialize, Serialize};

/// An independently configured cache namespace.
///
/// Each tier owns its own TTL, its own hit/miss counters and its own key
/// prefix: invalidating or reconfiguring one tier never affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheTier {
    /// Ranked product search result pages.
    SearchResults,
    /// Typeahead suggestions.
    Suggestions,
    /// Facet breakdowns.
    Facets,
    /// Storefront global search box results.
    GlobalSearch,
}

impl CacheTier {
    /// Every tier, in a fixed order usable for indexing.
    pub const ALL: [CacheTier; 4] = [
        CacheTier::SearchResults,
        CacheTier::Suggestions,
        CacheTier::Facets,
        CacheTier::GlobalSearch,
    ];

    /// The key namespace prefix for this tier.
    pub fn key_prefix(self) -> &'static str {
        match self {
            CacheTier::SearchResults => "search",
            CacheTier::Suggestions => "suggest",
            CacheTier::Facets => "facets",
            CacheTier::GlobalSearch => "global",
        }
    }

    /// Stable label used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            CacheTier::SearchResults => "search_results",
            CacheTier::Suggestions => "suggestions",
            CacheTier::Facets => "facets",
            CacheTier::GlobalSearch => "global_search",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for CacheTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
