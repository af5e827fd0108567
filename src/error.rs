//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache cannot be constructed as
//!   configured (e.g. storage for the requested capacity cannot be
//!   preallocated).
//! - [`InvariantError`]: Returned by
//!   [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants)
//!   when the index and the recency list disagree.
//!
//! Lookups never produce an error: a missing key is `None`.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::builder::CacheBuilder;
//! use lrukit::error::ConfigError;
//! use lrukit::LruCache;
//!
//! let cache: Result<LruCache<u64, String>, ConfigError> =
//!     CacheBuilder::new(128).try_build();
//! assert!(cache.is_ok());
//!
//! // An unsatisfiable preallocation is reported instead of aborting.
//! let bad = CacheBuilder::new(usize::MAX).try_build::<u64, String>();
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed. Seeing
/// one of these means a bug in the cache, not a misuse by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters cannot be honored.
///
/// Produced by [`LruCache::try_with_config`](crate::policy::lru::LruCache::try_with_config)
/// and [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build).
///
/// # Example
///
/// ```
/// use lrukit::builder::CacheBuilder;
///
/// let err = CacheBuilder::new(usize::MAX)
///     .try_build::<u64, u64>()
///     .unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
