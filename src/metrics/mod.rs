//! Operation counters for [`LruCache`](crate::policy::lru::LruCache).
//!
//! Only compiled with the `metrics` feature. Recording is split from
//! consumption: the cache writes counters through the recorder traits and
//! callers read them back as an [`LruMetricsSnapshot`](snapshot::LruMetricsSnapshot).

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
