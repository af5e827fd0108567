#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::{SlotArena, SlotId};

// Fuzz arbitrary operation sequences on SlotArena
//
// Handles are never forgotten, so removed ones keep being probed after
// their slot is reused. A stale handle must never reach the new value.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut ids: Vec<(SlotId, Option<u32>)> = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 4;
        let value = u32::from(pair[1]);

        match op {
            0 => {
                let id = arena.insert(value);
                ids.push((id, Some(value)));
                assert_eq!(arena.get(id), Some(&value));
            }
            1 => {
                if !ids.is_empty() {
                    let idx = (value as usize) % ids.len();
                    let (id, expected) = ids[idx];
                    let old_len = arena.len();
                    assert_eq!(arena.remove(id), expected);
                    if expected.is_some() {
                        assert_eq!(arena.len(), old_len - 1);
                    }
                    ids[idx].1 = None;
                }
            }
            2 => {
                if !ids.is_empty() {
                    let idx = (value as usize) % ids.len();
                    let (id, expected) = ids[idx];
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                        ids[idx].1 = Some(value);
                    } else {
                        assert_eq!(expected, None);
                    }
                }
            }
            _ => {
                for &(id, expected) in &ids {
                    assert_eq!(arena.get(id).copied(), expected);
                    assert_eq!(arena.contains(id), expected.is_some());
                }
            }
        }

        let live = ids.iter().filter(|(_, v)| v.is_some()).count();
        assert_eq!(arena.len(), live);
    }
});
