// ==============================================
// LRU PERFORMANCE TESTS (integration)
// ==============================================
//
// Loose latency bounds on the non-validating hot paths. Inserts run the
// full invariant check in debug builds, so only reads are timed here.

use lrukit::LruCache;
use std::time::{Duration, Instant};

fn measure_time<F, R>(operation: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = operation();
    let duration = start.elapsed();
    (result, duration)
}

fn filled(size: u32) -> LruCache<u32, u64> {
    let mut cache = LruCache::with_config(lrukit::LruConfig {
        capacity: size as usize,
        prealloc_memory: true,
    });
    for i in 0..size {
        cache.put(i, u64::from(i) * 10);
    }
    cache
}

mod lookup_performance {
    use super::*;

    #[test]
    fn get_latency() {
        let mut cache = filled(1000);

        let iterations = 10_000u32;
        let (_, duration) = measure_time(|| {
            for i in 0..iterations {
                cache.get(&(i % 1000));
            }
        });

        let avg_latency = duration / iterations;
        println!("Average get latency: {:?}", avg_latency);
        assert!(
            avg_latency < Duration::from_micros(10),
            "Get operation too slow: {:?}",
            avg_latency
        );
    }

    #[test]
    fn get_latency_does_not_grow_with_size() {
        let mut results = Vec::new();
        for size in [100u32, 1000, 4000] {
            let mut cache = filled(size);
            let iterations = 20_000u32;
            let (_, duration) = measure_time(|| {
                for i in 0..iterations {
                    cache.get(&(i % size));
                }
            });
            let avg = duration / iterations;
            println!("size {:>5}: avg get {:?}", size, avg);
            results.push(avg);
        }

        for avg in results {
            assert!(avg < Duration::from_micros(10), "get too slow: {:?}", avg);
        }
    }

    #[test]
    fn peek_and_contains_latency() {
        let cache = filled(1000);

        let iterations = 10_000u32;
        let (hits, duration) = measure_time(|| {
            let mut hits = 0usize;
            for i in 0..iterations {
                if cache.peek(&(i % 2000)).is_some() {
                    hits += 1;
                }
                if cache.contains(&(i % 2000)) {
                    hits += 1;
                }
            }
            hits
        });

        assert_eq!(hits, 10_000);
        let avg_latency = duration / (iterations * 2);
        assert!(
            avg_latency < Duration::from_micros(5),
            "Peek operation too slow: {:?}",
            avg_latency
        );
    }
}
