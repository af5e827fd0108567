//! # Least Recently Used (LRU) Cache
//!
//! A fixed-capacity key-value cache that evicts the least recently used
//! entry when a new key arrives and the cache is full.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                           LruCache<K, V>                             │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (index)                               │   │
//!   │   │                                                              │   │
//!   │   │   key_1 ──────────────┐                                      │   │
//!   │   │   key_2 ────────────────────────┐                            │   │
//!   │   │   key_3 ──────────────────────────────────┐                  │   │
//!   │   └───────────────────────┼─────────┼─────────┼──────────────────┘   │
//!   │                           ▼         ▼         ▼                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  IntrusiveList<Entry<K, V>>  (recency order over SlotArena)  │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [k1:v1] ◄──► [k2:v2] ◄──► [k3:v3] ◄── tail         │   │
//!   │   │           (MRU)                      (LRU)                   │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The list owns every entry; the index only holds `SlotId` handles into the
//! list's arena. Handles are generation-checked, so a handle that outlived
//! its entry resolves to nothing rather than to whichever entry reused the
//! slot.
//!
//! ## Operations Flow
//!
//! ```text
//!   PUT new key (cache full, capacity = 3)
//!   ═══════════════════════════════════════════════════════════════════
//!     head ──► [C] ◄──► [B] ◄──► [A] ◄── tail
//!
//!   put(D):
//!     1. pop [A] from the tail, drop its index entry
//!     2. push [D] at the head, index D → its SlotId
//!
//!     head ──► [D] ◄──► [C] ◄──► [B] ◄── tail
//!
//!   GET existing key
//!   ═══════════════════════════════════════════════════════════════════
//!   get(B):
//!     1. index lookup: O(1)
//!     2. relink [B] at the head: O(1), no other handle changes
//!
//!     head ──► [B] ◄──► [D] ◄──► [C] ◄── tail
//! ```
//!
//! ## Methods
//!
//! | Method              | Complexity | Description                               |
//! |---------------------|------------|-------------------------------------------|
//! | `new(capacity)`     | O(1)       | Empty cache, storage grows lazily         |
//! | `with_config(cfg)`  | O(cap)     | Empty cache, optionally preallocated      |
//! | `put(k, v)`         | O(1)*      | Insert or update, may evict the LRU entry |
//! | `insert(k, v)`      | O(1)*      | `put` that returns the replaced value     |
//! | `get(&k)`           | O(1)       | Lookup, moves the entry to MRU            |
//! | `peek(&k)`          | O(1)       | Lookup without touching recency           |
//! | `contains(&k)`      | O(1)       | Membership without touching recency       |
//! | `touch(&k)`         | O(1)       | Move to MRU without reading               |
//! | `peek_lru()`        | O(1)       | Next eviction victim                      |
//! | `recency_rank(&k)`  | O(n)       | Position in recency order (0 = MRU)       |
//! | `iter()`            | O(n)       | Entries from MRU to LRU                   |
//! | `check_invariants`  | O(n)       | Verify index/list agreement               |
//!
//! `*` amortized over index growth.
//!
//! ## Capacity 0
//!
//! A zero-capacity cache accepts every call but stores nothing: `put` of a
//! new key is a no-op and `get` always misses.
//!
//! ## Thread Safety
//!
//! `LruCache` is not synchronized. Even `get` mutates recency order, so
//! shared use needs an exclusive lock around every call.

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::builder::LruConfig;
use crate::ds::intrusive_list::{IntrusiveList, IntrusiveListIter};
use crate::ds::slot_arena::SlotId;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsReset,
    MetricsSnapshotProvider,
};
use crate::traits::{CoreCache, LruCacheTrait};

/// A cached key-value pair, stored in the recency list.
///
/// The key is kept alongside the value so eviction from the tail can find
/// the index entry to drop.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity cache with least-recently-used eviction.
///
/// # Example
///
/// ```
/// use lrukit::LruCache;
///
/// let mut history = LruCache::new(3);
/// history.put(1, "A");
/// history.put(2, "B");
/// history.put(3, "C");
///
/// // Full: key 1 is the least recently used and goes first.
/// history.put(4, "D");
/// assert_eq!(history.get(&1), None);
///
/// // Reading key 2 protects it; key 3 is now the tail.
/// assert_eq!(history.get(&2), Some(&"B"));
/// history.put(5, "E");
///
/// let order: Vec<_> = history.keys().copied().collect();
/// assert_eq!(order, vec![5, 2, 4]);
/// ```
pub struct LruCache<K, V> {
    index: FxHashMap<K, SlotId>,
    order: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Storage is not reserved up front; it grows with the number of live
    /// entries. A capacity of 0 creates a cache that stores nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::LruCache;
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::from_parts(capacity, FxHashMap::default(), IntrusiveList::new())
    }

    /// Creates a cache from a [`LruConfig`].
    ///
    /// # Panics
    ///
    /// Panics if the configuration cannot be honored. See
    /// [`try_with_config`](Self::try_with_config).
    pub fn with_config(config: LruConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache from a [`LruConfig`], returning an error instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `prealloc_memory` is set and storage for
    /// `capacity` entries cannot be reserved (capacity overflow or
    /// allocation failure).
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::builder::LruConfig;
    /// use lrukit::LruCache;
    ///
    /// let config = LruConfig { capacity: 32, prealloc_memory: true };
    /// let cache = LruCache::<u64, u64>::try_with_config(config).unwrap();
    /// assert_eq!(cache.capacity(), 32);
    /// ```
    pub fn try_with_config(config: LruConfig) -> Result<Self, ConfigError> {
        let LruConfig {
            capacity,
            prealloc_memory,
        } = config;

        let mut index = FxHashMap::default();
        let mut order = IntrusiveList::new();
        if prealloc_memory {
            let reserve_err = |e| {
                ConfigError::new(format!(
                    "cannot preallocate storage for capacity {}: {}",
                    capacity, e
                ))
            };
            order.try_reserve(capacity).map_err(reserve_err)?;
            index.try_reserve(capacity).map_err(reserve_err)?;
        }
        Ok(Self::from_parts(capacity, index, order))
    }

    fn from_parts(
        capacity: usize,
        index: FxHashMap<K, SlotId>,
        order: IntrusiveList<Entry<K, V>>,
    ) -> Self {
        debug!(
            "lru cache created: capacity={} reserved={}",
            capacity,
            index.capacity()
        );
        Self {
            index,
            order,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Inserts or updates `key`, marking it most recently used.
    ///
    /// If `key` is new and the cache is full, the least recently used entry
    /// is evicted first and dropped. With capacity 0 nothing is stored.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.put("a", 1);
    /// cache.put("a", 2);
    /// assert_eq!(cache.len(), 1);
    /// assert_eq!(cache.get(&"a"), Some(&2));
    /// ```
    #[inline]
    pub fn put(&mut self, key: K, value: V) {
        let _ = CoreCache::insert(self, key, value);
    }

    /// Returns the entries from most to least recently used.
    ///
    /// Read-only: iterating does not change recency order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.order.iter(),
        }
    }

    /// Returns the keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Verifies that the index and the recency list describe the same set
    /// of entries and that the capacity bound holds.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first inconsistency found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {} entries",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.order.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.order.len(),
                self.capacity
            )));
        }
        self.order.validate()?;

        // Equal cardinality plus every key resolving to a node that carries
        // it rules out duplicate keys in the list.
        for (key, &id) in &self.index {
            let entry = self.order.get(id).ok_or_else(|| {
                InvariantError::new(format!("index points at stale slot {:?}", id))
            })?;
            if entry.key != *key {
                return Err(InvariantError::new(format!(
                    "slot {:?} holds a different key than the index maps to it",
                    id
                )));
            }
        }
        Ok(())
    }

    #[inline]
    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        if let Err(e) = self.check_invariants() {
            panic!("lru invariant violated: {}", e);
        }
    }

    /// Drops the tail entry and its index entry together.
    fn evict_lru(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let victim = self.order.back_id();
        if let Some(entry) = self.order.pop_back() {
            self.index.remove(&entry.key);
            trace!(
                "lru evicted slot {:?} (len={}, capacity={})",
                victim,
                self.order.len(),
                self.capacity
            );
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
        }
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = self
                .order
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
            self.order.move_to_front(id);
            self.debug_validate();
            return previous;
        }

        if self.capacity == 0 {
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.order.len() >= self.capacity {
            self.evict_lru();
        }

        let id = self.order.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        self.debug_validate();
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.order.move_to_front(id);
        self.order.get(id).map(|entry| &entry.value)
    }

    fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let value = self
            .index
            .get(key)
            .and_then(|&id| self.order.get(id))
            .map(|entry| &entry.value);

        #[cfg(feature = "metrics")]
        if value.is_some() {
            self.metrics.record_peek_found();
        }

        value
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_call();

        let entry = self.order.back()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        match self.index.get(key) {
            Some(&id) => {
                self.order.move_to_front(id);

                #[cfg(feature = "metrics")]
                self.metrics.record_touch_found();

                true
            },
            None => false,
        }
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        self.metrics.record_recency_rank_call();

        let &target = self.index.get(key)?;
        for (rank, id) in self.order.iter_ids().enumerate() {
            #[cfg(feature = "metrics")]
            self.metrics.record_recency_rank_scan_step();

            if id == target {
                #[cfg(feature = "metrics")]
                self.metrics.record_recency_rank_found();
                return Some(rank);
            }
        }
        None
    }
}

// Inherent forwards so callers do not need the traits in scope.
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts or updates `key`, returning the value it replaced.
    ///
    /// Same semantics as [`put`](Self::put). An entry evicted to make room
    /// is dropped, not returned.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        CoreCache::insert(self, key, value)
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// `None` means the key is absent; the cache is left untouched.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        CoreCache::get(self, key)
    }

    /// Returns the value for `key` without changing recency order.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        CoreCache::peek(self, key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        CoreCache::contains(self, key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        CoreCache::len(self)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        CoreCache::is_empty(self)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        CoreCache::capacity(self)
    }

    /// Returns the least recently used entry without changing its position.
    #[inline]
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCacheTrait::peek_lru(self)
    }

    /// Marks `key` most recently used; `false` if absent.
    #[inline]
    pub fn touch(&mut self, key: &K) -> bool {
        LruCacheTrait::touch(self, key)
    }

    /// Position of `key` in recency order (0 = most recent). O(n).
    #[inline]
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCacheTrait::recency_rank(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot::capture(&self.metrics, self.index.len(), self.capacity)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsReset for LruCache<K, V> {
    fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<(&K, &V)> = self
            .order
            .iter()
            .map(|entry| (&entry.key, &entry.value))
            .collect();
        f.debug_struct("LruCache")
            .field("len", &self.order.len())
            .field("capacity", &self.capacity)
            .field("entries", &entries)
            .finish()
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Iterator over a cache's entries from most to least recently used.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: IntrusiveListIter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
