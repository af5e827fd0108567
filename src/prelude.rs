//! Common imports.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache = CacheBuilder::new(8).build::<u32, u32>();
//! cache.insert(1, 1);
//! assert_eq!(cache.peek_lru(), Some((&1, &1)));
//! ```

pub use crate::builder::{CacheBuilder, LruConfig};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider};
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait};
