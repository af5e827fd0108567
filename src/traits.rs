//! # Cache Traits
//!
//! Two small traits split the cache surface into what any bounded cache
//! offers and what only a recency-ordered cache can answer.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  peek(&, &K) → Option<&V>               │
//!   │  contains(&, &K) → bool                 │
//!   │  len / is_empty / capacity              │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │                                         │
//!   │  peek_lru(&) → Option<(&K, &V)>         │
//!   │  touch(&mut, &K) → bool                 │
//!   │  recency_rank(&, &K) → Option<usize>    │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! Neither trait offers arbitrary removal: entries leave a cache only by
//! being evicted.

/// Core cache operations.
///
/// # Example
///
/// ```
/// use lrukit::traits::CoreCache;
/// use lrukit::LruCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    ///
    /// If the key is new and the cache is full, an entry is evicted first
    /// according to the cache's policy.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key, recording the access.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Gets a reference to a value without recording an access.
    fn peek(&self, key: &K) -> Option<&V>;

    /// Checks if a key exists without recording an access.
    fn contains(&self, key: &K) -> bool {
        self.peek(key).is_some()
    }

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;
}

/// Recency-ordered cache operations.
///
/// # Example
///
/// ```
/// use lrukit::traits::{CoreCache, LruCacheTrait};
/// use lrukit::LruCache;
///
/// let mut cache = LruCache::new(3);
/// cache.insert(1, "a");
/// cache.insert(2, "b");
/// cache.insert(3, "c");
///
/// assert_eq!(cache.peek_lru(), Some((&1, &"a")));
/// assert!(cache.touch(&1));
/// assert_eq!(cache.peek_lru(), Some((&2, &"b")));
/// assert_eq!(cache.recency_rank(&1), Some(0));
/// ```
pub trait LruCacheTrait<K, V>: CoreCache<K, V> {
    /// Returns the least recently used entry (the next eviction victim)
    /// without changing its position.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` as most recently used without reading it.
    ///
    /// Returns `false` if the key is absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` in recency order, `0` being the most recently used.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}
