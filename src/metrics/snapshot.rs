use crate::metrics::metrics_impl::LruMetrics;

/// Point-in-time copy of an LRU cache's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evict_calls: u64,
    pub evicted_entries: u64,

    pub touch_calls: u64,
    pub touch_found: u64,
    pub peek_calls: u64,
    pub peek_found: u64,
    pub peek_lru_calls: u64,
    pub peek_lru_found: u64,
    pub recency_rank_calls: u64,
    pub recency_rank_found: u64,
    pub recency_rank_scan_steps: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl LruMetricsSnapshot {
    pub(crate) fn capture(metrics: &LruMetrics, cache_len: usize, capacity: usize) -> Self {
        Self {
            get_calls: metrics.get_calls,
            get_hits: metrics.get_hits,
            get_misses: metrics.get_misses,
            insert_calls: metrics.insert_calls,
            insert_updates: metrics.insert_updates,
            insert_new: metrics.insert_new,
            evict_calls: metrics.evict_calls,
            evicted_entries: metrics.evicted_entries,
            touch_calls: metrics.touch_calls,
            touch_found: metrics.touch_found,
            peek_calls: metrics.peek_calls.get(),
            peek_found: metrics.peek_found.get(),
            peek_lru_calls: metrics.peek_lru_calls.get(),
            peek_lru_found: metrics.peek_lru_found.get(),
            recency_rank_calls: metrics.recency_rank_calls.get(),
            recency_rank_found: metrics.recency_rank_found.get(),
            recency_rank_scan_steps: metrics.recency_rank_scan_steps.get(),
            cache_len,
            capacity,
        }
    }

    /// Fraction of `get` calls that hit, or `0.0` before the first call.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
