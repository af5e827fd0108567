#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::{IntrusiveList, SlotId};

// Fuzz arbitrary operation sequences on IntrusiveList
//
// Tests random sequences of push_front, pop_back, move_to_front and get,
// including operations on handles whose nodes were already popped.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut ids: Vec<SlotId> = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 4;
        let value = u32::from(pair[1]);

        match op {
            0 => {
                let id = list.push_front(value);
                ids.push(id);
                assert_eq!(list.front(), Some(&value));
                assert_eq!(list.front_id(), Some(id));
            }
            1 => {
                let old_len = list.len();
                let tail = list.back().copied();
                let popped = list.pop_back();
                assert_eq!(popped, tail);
                if popped.is_some() {
                    assert_eq!(list.len(), old_len - 1);
                }
            }
            2 => {
                if !ids.is_empty() {
                    let id = ids[(value as usize) % ids.len()];
                    let live = list.contains(id);
                    assert_eq!(list.move_to_front(id), live);
                    if live {
                        assert_eq!(list.front_id(), Some(id));
                    }
                }
            }
            _ => {
                if !ids.is_empty() {
                    let id = ids[(value as usize) % ids.len()];
                    assert_eq!(list.get(id).is_some(), list.contains(id));
                }
            }
        }

        assert!(list.validate().is_ok());
        assert_eq!(list.iter().count(), list.len());
    }
});
