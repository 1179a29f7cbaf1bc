//! Deterministic cache key derivation.
//!
//! ## Key format
//!
//! `{tier}:{scope}:{digest}` — e.g. `search:v1:9f86d08...`
//!
//! The tier prefix guarantees no cross-tier collisions even on identical
//! option digests. The scope component is the payload schema version: bump
//! it when the cached payload encoding changes and stale entries become
//! unreadable garbage instead of decode errors. The digest is the SHA-256
//! of the options' canonical JSON, so logically identical options always
//! collide to one key while distinct options diverge with overwhelming
//! probability (accidental collisions only; this is not an adversarial
//! boundary).

use sha2::{Digest, Sha256};

use shopsearch_core::CacheKeyed;

use crate::tier::CacheTier;

/// Version tag for the cached payload encoding.
pub const KEY_SCHEMA_VERSION: &str = "v1";

/// Derives the cache key for `options` under `tier`.
pub fn derive_key(tier: CacheTier, options: &impl CacheKeyed) -> String {
    let canonical = options.canonical_value().to_string();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{}:{}:{}", tier.key_prefix(), KEY_SCHEMA_VERSION, digest)
}

/// Builds the store pattern covering `sub_pattern` within a tier's namespace.
pub fn tier_pattern(tier: CacheTier, sub_pattern: &str) -> String {
    format!("{}:{}:{}", tier.key_prefix(), KEY_SCHEMA_VERSION, sub_pattern)
}
