//! Cache configuration and builder.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::lru::LruCache;

/// Configuration for [`LruCache`] construction.
///
/// | Field             | Type    | Default | Description                          |
/// |-------------------|---------|---------|--------------------------------------|
/// | `capacity`        | `usize` | 1000    | Maximum number of entries            |
/// | `prealloc_memory` | `bool`  | true    | Reserve storage for `capacity` up front |
///
/// # Example
///
/// ```
/// use lrukit::builder::LruConfig;
///
/// let config = LruConfig {
///     capacity: 64,
///     ..Default::default()
/// };
/// assert!(config.prealloc_memory);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LruConfig {
    /// Maximum number of entries the cache can hold. `0` yields a cache
    /// that stores nothing.
    pub capacity: usize,

    /// Reserve index and arena storage for the full capacity at construction.
    ///
    /// When false, storage grows as entries arrive.
    pub prealloc_memory: bool,
}

impl Default for LruConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            prealloc_memory: true,
        }
    }
}

/// Builder for [`LruCache`] instances.
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    config: LruConfig,
}

impl CacheBuilder {
    /// Create a new builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            config: LruConfig {
                capacity,
                ..LruConfig::default()
            },
        }
    }

    /// Whether to reserve storage for the full capacity up front.
    pub fn prealloc(mut self, prealloc: bool) -> Self {
        self.config.prealloc_memory = prealloc;
        self
    }

    /// Returns the configuration assembled so far.
    pub fn config(&self) -> &LruConfig {
        &self.config
    }

    /// Build the cache.
    ///
    /// # Panics
    ///
    /// Panics if the configuration cannot be honored. See
    /// [`try_build`](Self::try_build).
    pub fn build<K, V>(self) -> LruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        LruCache::with_config(self.config)
    }

    /// Build the cache, returning an error instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if preallocation was requested and storage
    /// for `capacity` entries cannot be reserved.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::builder::CacheBuilder;
    ///
    /// assert!(CacheBuilder::new(16).try_build::<u64, u64>().is_ok());
    /// assert!(CacheBuilder::new(usize::MAX).try_build::<u64, u64>().is_err());
    ///
    /// // Without preallocation storage grows lazily, so any capacity works.
    /// let cache = CacheBuilder::new(usize::MAX)
    ///     .prealloc(false)
    ///     .try_build::<u64, u64>()
    ///     .unwrap();
    /// assert_eq!(cache.capacity(), usize::MAX);
    /// ```
    pub fn try_build<K, V>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        LruCache::try_with_config(self.config)
    }
}
