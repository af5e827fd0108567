// ==============================================
// LRU BEHAVIORAL INVARIANTS (integration)
// ==============================================
//
// Exercises the public surface only: capacity bound, eviction order,
// recency updates and index/list agreement under long operation mixes.

use lrukit::builder::CacheBuilder;
use lrukit::traits::{CoreCache, LruCacheTrait};
use lrukit::LruCache;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn keys_of<V>(cache: &LruCache<u32, V>) -> Vec<u32> {
    cache.keys().copied().collect()
}

// ==============================================
// Reference model
// ==============================================
//
// Vec ordered most-recent first. Every operation is a linear scan, which
// is fine for the small capacities used here.

struct ModelLru {
    capacity: usize,
    entries: Vec<(u32, u64)>,
}

impl ModelLru {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    fn get(&mut self, key: u32) -> Option<u64> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn put(&mut self, key: u32, value: u64) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
        } else if self.capacity == 0 {
            return;
        } else if self.entries.len() == self.capacity {
            self.entries.pop();
        }
        self.entries.insert(0, (key, value));
    }

    fn touch(&mut self, key: u32) -> bool {
        self.get(key).is_some()
    }

    fn order(&self) -> Vec<(u32, u64)> {
        self.entries.clone()
    }
}

mod model_check {
    use super::*;

    fn run(seed: u64, capacity: usize, key_space: u32, steps: usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cache: LruCache<u32, u64> = LruCache::new(capacity);
        let mut model = ModelLru::new(capacity);

        for step in 0..steps {
            let key = rng.random_range(0..key_space);
            match rng.random_range(0..10u8) {
                0..=4 => {
                    let value = rng.random::<u64>();
                    cache.put(key, value);
                    model.put(key, value);
                },
                5..=7 => {
                    assert_eq!(
                        cache.get(&key).copied(),
                        model.get(key),
                        "get({}) diverged at step {}",
                        key,
                        step
                    );
                },
                8 => {
                    assert_eq!(cache.touch(&key), model.touch(key), "touch at step {}", step);
                },
                _ => {
                    let expected = model.entries.iter().find(|(k, _)| *k == key).map(|e| e.1);
                    assert_eq!(cache.peek(&key).copied(), expected, "peek at step {}", step);
                },
            }

            let actual: Vec<(u32, u64)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            assert_eq!(actual, model.order(), "order diverged at step {}", step);
            assert!(cache.len() <= capacity);
            cache.check_invariants().unwrap();
        }
    }

    #[test]
    fn small_capacity_high_churn() {
        run(0x5eed, 4, 16, 5_000);
    }

    #[test]
    fn keys_fit_in_capacity() {
        run(7, 32, 16, 2_000);
    }

    #[test]
    fn capacity_one() {
        run(42, 1, 4, 1_000);
    }

    #[test]
    fn capacity_zero() {
        run(1, 0, 8, 500);
    }

    #[test]
    fn several_seeds() {
        for seed in 100..110 {
            run(seed, 8, 24, 1_000);
        }
    }
}

// ==============================================
// Capacity and eviction
// ==============================================

mod capacity_bound {
    use super::*;

    #[test]
    fn len_is_min_of_distinct_keys_and_capacity() {
        for capacity in [0usize, 1, 2, 7, 64] {
            let mut cache = LruCache::new(capacity);
            for i in 0..100u32 {
                cache.put(i, i);
                assert_eq!(cache.len(), (i as usize + 1).min(capacity));
            }
        }
    }

    #[test]
    fn evicted_key_is_always_the_tail() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut cache = LruCache::new(6);
        for i in 0..6u32 {
            cache.put(i, ());
        }

        for next in 6..200u32 {
            let probe = rng.random_range(0..next);
            cache.get(&probe);

            let (&victim, _) = cache.peek_lru().unwrap();
            cache.put(next, ());
            assert!(!cache.contains(&victim), "expected {} to be evicted", victim);
            assert_eq!(cache.len(), 6);
        }
    }

    #[test]
    fn update_never_evicts() {
        let mut cache = LruCache::new(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);
        for round in 0..10 {
            cache.put(2, round);
            assert_eq!(cache.len(), 3);
        }
        assert_eq!(keys_of(&cache), vec![2, 3, 1]);
    }
}

// ==============================================
// Scenarios
// ==============================================

mod scenarios {
    use super::*;

    #[test]
    fn browsing_history() {
        let mut cache = LruCache::new(3);
        cache.put(1, "A");
        cache.put(2, "B");
        cache.put(3, "C");
        cache.put(4, "D");
        assert_eq!(keys_of(&cache), vec![4, 3, 2]);

        assert_eq!(cache.get(&2), Some(&"B"));
        assert_eq!(keys_of(&cache), vec![2, 4, 3]);

        cache.put(5, "E");
        assert_eq!(keys_of(&cache), vec![5, 2, 4]);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&3), None);
    }

    #[test]
    fn works_through_generic_trait_bounds() {
        fn fill<C: CoreCache<u32, u32>>(cache: &mut C, n: u32) {
            for i in 0..n {
                cache.insert(i, i * 2);
            }
        }

        fn coldest<C: LruCacheTrait<u32, u32>>(cache: &C) -> Option<u32> {
            cache.peek_lru().map(|(k, _)| *k)
        }

        let mut cache = CacheBuilder::new(4).build::<u32, u32>();
        fill(&mut cache, 10);
        assert_eq!(coldest(&cache), Some(6));
        assert_eq!(cache.recency_rank(&6), Some(3));
    }

    #[test]
    fn builder_and_new_agree() {
        let mut built = CacheBuilder::new(5).prealloc(true).build::<u32, u32>();
        let mut plain = LruCache::new(5);
        for i in 0..20u32 {
            built.put(i % 7, i);
            plain.put(i % 7, i);
            built.get(&(i % 3));
            plain.get(&(i % 3));
        }
        assert_eq!(
            built.iter().collect::<Vec<_>>(),
            plain.iter().collect::<Vec<_>>()
        );
    }
}
