//! In-memory cache store backed by DashMap.
//!
//! Single-instance backend: entries live in process memory with lazy TTL
//! expiry. Expired entries are dropped on read; [`MemoryStore::cleanup_expired`]
//! sweeps the rest and is intended to run from a periodic task in the host.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use regex::Regex;

use crate::error::StoreError;
use crate::traits::CacheStore;

struct StoredEntry {
    data: Vec<u8>,
    expires_at: Instant,
}

impl StoredEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at <= Instant::now()
    }
}

/// In-memory `CacheStore` implementation.
pub struct MemoryStore {
    entries: DashMap<String, StoredEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of entries currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all expired entries. Returns the number removed.
    pub fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;

        self.entries.retain(|_, entry| {
            if entry.expires_at <= now {
                removed += 1;
                false
            } else {
                true
            }
        });

        if removed > 0 {
            tracing::debug!(removed, "swept expired cache entries");
        }

        removed
    }

    /// Compiles a glob pattern (`*` wildcard only) into an anchored regex.
    fn compile_pattern(pattern: &str) -> Result<Regex, StoreError> {
        let escaped = regex::escape(pattern).replace(r"\*", ".*");
        Regex::new(&format!("^{escaped}$"))
            .map_err(|e| StoreError::invalid_pattern(pattern, e.to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired() {
                return Ok(Some(entry.data.clone()));
            }
            // Expired: drop the read guard before removing.
            drop(entry);
            self.entries.remove(key);
        }
        Ok(None)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        self.entries
            .insert(key.to_string(), StoredEntry::new(value, ttl));
        Ok(())
    }

    async fn delete_by_pattern(&self, pattern: &str) -> Result<u64, StoreError> {
        let matcher = Self::compile_pattern(pattern)?;
        let mut removed = 0u64;

        self.entries.retain(|key, _| {
            if matcher.is_match(key) {
                removed += 1;
                false
            } else {
                true
            }
        });

        tracing::debug!(pattern, removed, "deleted cache entries by pattern");
        Ok(removed)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_roundtrip() {
        let store = MemoryStore::new();
        store
            .set_with_expiry("search:v1:abc", b"payload".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        let value = store.get("search:v1:abc").await.unwrap();
        assert_eq!(value, Some(b"payload".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn expired_entry_reads_as_missing() {
        let store = MemoryStore::new();
        store
            .set_with_expiry("k", b"v".to_vec(), Duration::from_millis(10))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(store.get("k").await.unwrap(), None);
        // The expired entry was dropped on read.
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn overwrite_replaces_entry() {
        let store = MemoryStore::new();
        store
            .set_with_expiry("k", b"old".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        store
            .set_with_expiry("k", b"new".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some(b"new".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn delete_by_pattern_scopes_to_prefix() {
        let store = MemoryStore::new();
        let ttl = Duration::from_secs(60);
        store
            .set_with_expiry("search:v1:a", b"1".to_vec(), ttl)
            .await
            .unwrap();
        store
            .set_with_expiry("search:v1:b", b"2".to_vec(), ttl)
            .await
            .unwrap();
        store
            .set_with_expiry("facets:v1:a", b"3".to_vec(), ttl)
            .await
            .unwrap();

        let removed = store.delete_by_pattern("search:v1:*").await.unwrap();
        assert_eq!(removed, 2);

        assert_eq!(store.get("search:v1:a").await.unwrap(), None);
        assert!(store.get("facets:v1:a").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn pattern_is_anchored_not_substring() {
        let store = MemoryStore::new();
        let ttl = Duration::from_secs(60);
        store
            .set_with_expiry("suggest:v1:x", b"1".to_vec(), ttl)
            .await
            .unwrap();

        // "v1:x" alone matches nothing: patterns cover the whole key.
        let removed = store.delete_by_pattern("v1:x").await.unwrap();
        assert_eq!(removed, 0);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn cleanup_sweeps_only_expired() {
        let store = MemoryStore::new();
        store
            .set_with_expiry("old", b"1".to_vec(), Duration::from_millis(10))
            .await
            .unwrap();
        store
            .set_with_expiry("fresh", b"2".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(store.cleanup_expired(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("fresh").await.unwrap().is_some());
    }
}
