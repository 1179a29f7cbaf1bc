//! The cache store trait all backends implement.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;

/// A key-value store holding cached bytes with per-entry expiry.
///
/// Implementations must be thread-safe (`Send + Sync`); the cache layer
/// issues independent get/set/delete calls from many tasks at once and
/// never wraps them in transactions. Consistency is eventual and
/// TTL-bounded by design.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Reads the bytes stored under `key`.
    ///
    /// Returns `Ok(None)` for a missing or expired entry.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, never for missing
    /// entries.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Writes `value` under `key`, expiring after `ttl`.
    ///
    /// Overwrites any existing entry; there are no partial updates.
    async fn set_with_expiry(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), StoreError>;

    /// Deletes every key matching a glob pattern (`*` wildcard only).
    ///
    /// Returns the number of keys removed.
    async fn delete_by_pattern(&self, pattern: &str) -> Result<u64, StoreError>;

    /// Returns the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
