//! Cache store abstraction for the ShopSearch cache subsystem.
//!
//! The [`CacheStore`] trait is the seam between caching logic and whatever
//! physically holds the bytes. This crate ships the in-memory backend used
//! for single-instance deployments and tests; a shared remote backend (e.g.
//! Redis) implements the same trait in its own crate.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use traits::CacheStore;

/// Type alias for a shareable store instance.
pub type DynCacheStore = std::sync::Arc<dyn CacheStore>;
