#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::LruCache;

// Fuzz arbitrary operation sequences on LruCache
//
// The first byte picks the capacity; the rest is consumed as (op, key) pairs.
// A naive Vec mirror (most recent first) checks every observable result.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap_byte % 17);

    let mut cache: LruCache<u8, u16> = LruCache::new(capacity);
    let mut mirror: Vec<(u8, u16)> = Vec::new();

    for (step, pair) in ops.chunks_exact(2).enumerate() {
        let op = pair[0] % 5;
        let key = pair[1] % 32;
        let value = u16::try_from(step).unwrap_or(u16::MAX);

        match op {
            0 => {
                // put
                cache.put(key, value);
                if let Some(pos) = mirror.iter().position(|(k, _)| *k == key) {
                    mirror.remove(pos);
                    mirror.insert(0, (key, value));
                } else if capacity > 0 {
                    if mirror.len() == capacity {
                        mirror.pop();
                    }
                    mirror.insert(0, (key, value));
                }
            }
            1 => {
                // get
                let expected = mirror.iter().position(|(k, _)| *k == key).map(|pos| {
                    let entry = mirror.remove(pos);
                    mirror.insert(0, entry);
                    entry.1
                });
                assert_eq!(cache.get(&key).copied(), expected);
            }
            2 => {
                // peek (no reorder)
                let expected = mirror.iter().find(|(k, _)| *k == key).map(|e| e.1);
                assert_eq!(cache.peek(&key).copied(), expected);
            }
            3 => {
                // touch
                let found = match mirror.iter().position(|(k, _)| *k == key) {
                    Some(pos) => {
                        let entry = mirror.remove(pos);
                        mirror.insert(0, entry);
                        true
                    }
                    None => false,
                };
                assert_eq!(cache.touch(&key), found);
            }
            _ => {
                // recency_rank and peek_lru
                let rank = mirror.iter().position(|(k, _)| *k == key);
                assert_eq!(cache.recency_rank(&key), rank);
                assert_eq!(cache.peek_lru(), mirror.last().map(|(k, v)| (k, v)));
            }
        }

        assert!(cache.len() <= capacity);
        assert_eq!(cache.len(), mirror.len());
        assert!(cache.check_invariants().is_ok());
    }

    let order: Vec<(u8, u16)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(order, mirror);
});
