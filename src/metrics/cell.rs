use std::cell::Cell;

/// A counter that can be bumped through a shared reference.
///
/// Used for operations that only take `&self` (`peek`, `peek_lru`,
/// `recency_rank`). The cache is single-threaded, so no synchronization is
/// involved and the owning cache is `!Sync` while metrics are enabled.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}
